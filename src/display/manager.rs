/*
 *  display/manager.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display manager: the service surface of one panel. Owns the client,
 *  the render context and at most one animation loop.
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex as TokMutex;

use crate::display::animator::{Animation, AnimationState};
use crate::display::renderer::{now_secs, render, RenderContext};
use crate::display::scene::{PreparedScene, SceneRequest};
use crate::error::UmpResult;
use crate::media::ImageSource;
use crate::transport::commands::MODE_EXTERNAL_FRAME;
use crate::transport::UmpClient;

/// Drives one panel.
///
/// Every operation that talks to the panel first stops a running
/// animation, so a stale frame can never land after an explicit command.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use std::time::Duration;
/// # use umpix::display::{DisplayManager, RenderContext, SceneRequest};
/// # use umpix::media::NoImages;
/// # use umpix::transport::{MockBackend, UmpClient};
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let client = UmpClient::new("AA:BB:CC:DD:EE:FF".parse()?, 32, 32,
///     Arc::new(MockBackend::new()), Duration::from_secs(20));
/// let manager = DisplayManager::new(Arc::new(client), RenderContext::new(32, 32), Arc::new(NoImages));
///
/// let scene = SceneRequest::from_json(r#"{"elements": [{"type": "text", "content": "HI"}]}"#)?;
/// manager.draw_visuals(scene).await?;
/// # Ok(())
/// # }
/// ```
pub struct DisplayManager {
    client: Arc<UmpClient>,
    ctx: RenderContext,
    images: Arc<dyn ImageSource>,
    animation: TokMutex<Option<Animation>>,
    powered: AtomicBool,
    static_send: AtomicBool,
}

impl DisplayManager {
    /// The panel is assumed on until told otherwise.
    pub fn new(client: Arc<UmpClient>, ctx: RenderContext, images: Arc<dyn ImageSource>) -> Self {
        Self {
            client,
            ctx,
            images,
            animation: TokMutex::new(None),
            powered: AtomicBool::new(true),
            static_send: AtomicBool::new(false),
        }
    }

    pub fn client(&self) -> &Arc<UmpClient> {
        &self.client
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    pub fn is_on(&self) -> bool {
        self.powered.load(Ordering::Acquire)
    }

    async fn stop_animation(slot: &mut Option<Animation>) {
        if let Some(anim) = slot.take() {
            debug!("cancelling running animation");
            anim.stop().await;
        }
    }

    /// Show a scene. Images are fetched and paged text wrapped before anything
    /// is sent. Returns the state the panel was left in.
    pub async fn draw_visuals(&self, request: SceneRequest) -> UmpResult<AnimationState> {
        let scene = PreparedScene::prepare(request, &self.ctx, self.images.as_ref()).await;

        let mut animation = self.animation.lock().await;
        Self::stop_animation(&mut animation).await;

        if !self.is_on() {
            self.client.set_state(true).await?;
            self.powered.store(true, Ordering::Release);
        }
        self.client.set_mode(MODE_EXTERNAL_FRAME).await?;

        if scene.needs_animation() {
            *animation = Some(Animation::spawn(self.client.clone(), self.ctx.clone(), Arc::new(scene)));
            return Ok(AnimationState::Animating);
        }

        self.static_send.store(true, Ordering::Release);
        let frame = render(&self.ctx, &scene, now_secs());
        let result = self.client.send_frame_if_changed(&frame).await;
        self.static_send.store(false, Ordering::Release);
        if !result? {
            debug!("static frame unchanged, not sent");
        }
        Ok(AnimationState::Static)
    }

    /// Stop any animation, reset the mode and blank the panel.
    pub async fn clear_display(&self) -> UmpResult<()> {
        let mut animation = self.animation.lock().await;
        Self::stop_animation(&mut animation).await;
        self.client.set_mode(MODE_EXTERNAL_FRAME).await?;
        self.client.clear().await
    }

    pub async fn sync_time(&self) -> UmpResult<()> {
        self.client.sync_time().await
    }

    pub async fn turn_on(&self) -> UmpResult<()> {
        self.powered.store(true, Ordering::Release);
        self.client.set_state(true).await?;
        self.client.set_mode(MODE_EXTERNAL_FRAME).await
    }

    pub async fn turn_off(&self) -> UmpResult<()> {
        let mut animation = self.animation.lock().await;
        Self::stop_animation(&mut animation).await;
        self.powered.store(false, Ordering::Release);
        self.client.set_state(false).await
    }

    /// Last transmitted frame as PNG, black before the first send.
    pub fn last_frame_png(&self) -> UmpResult<Vec<u8>> {
        self.client.last_frame_png()
    }

    pub async fn animation_state(&self) -> AnimationState {
        if self.static_send.load(Ordering::Acquire) {
            return AnimationState::Static;
        }
        match self.animation.lock().await.as_ref() {
            Some(anim) if anim.is_running() => AnimationState::Animating,
            _ => AnimationState::Idle,
        }
    }

    /// Stop animating and release the link.
    pub async fn shutdown(&self) {
        let mut animation = self.animation.lock().await;
        Self::stop_animation(&mut animation).await;
        self.client.disconnect().await;
        info!("display {} shut down", self.client.address());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::canvas::Frame;
    use crate::media::NoImages;
    use crate::transport::commands;
    use crate::transport::MockBackend;
    use serde_json::json;
    use std::time::Duration;

    fn manager(backend: &MockBackend) -> DisplayManager {
        let client = UmpClient::new(
            "AA:BB:CC:DD:EE:FF".parse().unwrap(),
            16,
            8,
            Arc::new(backend.clone()),
            Duration::from_secs(20),
        );
        DisplayManager::new(Arc::new(client), RenderContext::new(16, 8), Arc::new(NoImages))
    }

    fn request(v: serde_json::Value) -> SceneRequest {
        serde_json::from_value(v).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_static_draw_selects_mode_and_sends_once() {
        let backend = MockBackend::new();
        let m = manager(&backend);
        let req = request(json!({"background": [10, 20, 30]}));
        assert_eq!(m.draw_visuals(req.clone()).await.unwrap(), AnimationState::Static);
        assert_eq!(m.draw_visuals(req).await.unwrap(), AnimationState::Static);

        let writes = backend.writes();
        assert_eq!(writes[0].data, commands::select_mode(0));
        assert_eq!(backend.frames_sent(), 1);
        assert_eq!(m.animation_state().await, AnimationState::Idle);

        let png = m.last_frame_png().unwrap();
        assert_eq!(Frame::from_png(&png).unwrap().pixel(15, 7), Some([10, 20, 30]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_draw_after_turn_off_powers_on_first() {
        let backend = MockBackend::new();
        let m = manager(&backend);
        m.turn_off().await.unwrap();
        assert!(!m.is_on());
        backend.clear_writes();

        m.draw_visuals(SceneRequest::default()).await.unwrap();
        let writes = backend.writes();
        assert_eq!(writes[0].data, commands::power(true));
        assert_eq!(writes[1].data, commands::select_mode(0));
        assert!(m.is_on());
    }

    #[tokio::test(start_paused = true)]
    async fn test_draw_skipped_when_mode_select_fails() {
        let backend = MockBackend::new();
        let m = manager(&backend);
        backend.set_unavailable(true);
        assert!(m.draw_visuals(SceneRequest::default()).await.is_err());
        assert_eq!(backend.frames_sent(), 0);
        assert!(m.client().last_frame().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_scene_replaces_animation() {
        let backend = MockBackend::new();
        let m = manager(&backend);
        let moving = request(json!({"elements": [{"type": "textscroll", "content": "abcdefgh"}]}));
        assert_eq!(m.draw_visuals(moving).await.unwrap(), AnimationState::Animating);
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(m.animation_state().await, AnimationState::Animating);

        m.draw_visuals(request(json!({"background": [1, 1, 1]}))).await.unwrap();
        assert_eq!(m.animation_state().await, AnimationState::Idle);
        let sent = backend.frames_sent();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(backend.frames_sent(), sent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_and_turn_off_stop_animation() {
        let backend = MockBackend::new();
        let m = manager(&backend);
        let moving = request(json!({"elements": [{"type": "textscroll", "content": "abcdefgh"}]}));
        m.draw_visuals(moving.clone()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;

        m.clear_display().await.unwrap();
        assert_eq!(m.animation_state().await, AnimationState::Idle);
        assert_eq!(m.client().last_frame(), Some(Frame::blank(16, 8)));

        m.draw_visuals(moving).await.unwrap();
        m.turn_off().await.unwrap();
        assert_eq!(m.animation_state().await, AnimationState::Idle);
        assert_eq!(backend.writes().last().unwrap().data, commands::power(false));
    }

    #[tokio::test]
    async fn test_shutdown_drops_link() {
        let backend = MockBackend::new();
        let m = manager(&backend);
        m.sync_time().await.unwrap();
        assert!(m.client().has_link());
        m.shutdown().await;
        assert!(!m.client().has_link());
        assert_eq!(backend.writes()[0].data.len(), 11);
    }
}
