/*
 *  display/animator.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Bounded-rate render, diff and send loop for moving scenes
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

use log::{debug, error, info, warn};
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::constants::TX_COOLDOWN;
use crate::display::renderer::{now_secs, render, RenderContext};
use crate::display::scene::PreparedScene;
use crate::error::UmpResult;
use crate::pacer::FramePacer;
use crate::transport::UmpClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// nothing running
    #[default]
    Idle,
    /// a one-shot render and send is in flight
    Static,
    /// the loop owns the panel
    Animating,
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationState::Idle => write!(f, "idle"),
            AnimationState::Static => write!(f, "static"),
            AnimationState::Animating => write!(f, "animating"),
        }
    }
}

/// Animation timeline in seconds. Anchored to the wall clock when the loop
/// starts and advanced by the monotonic clock, so a wall clock step never
/// makes the scene jump.
struct Timeline {
    epoch: f64,
    started: Instant,
}

impl Timeline {
    fn start() -> Self {
        Self { epoch: now_secs(), started: Instant::now() }
    }

    fn now(&self) -> f64 {
        self.epoch + self.started.elapsed().as_secs_f64()
    }
}

/// Render the scene at `now` and send it if it differs from what the panel shows.
pub async fn tick(client: &UmpClient, ctx: &RenderContext, scene: &PreparedScene, now: f64) -> UmpResult<bool> {
    let frame = render(ctx, scene, now);
    client.send_frame_if_changed(&frame).await
}

/// The loop body. Returns when `cancel` fires or on an error that is not a
/// link failure; link failures cool down and carry on.
pub async fn run(client: Arc<UmpClient>, ctx: RenderContext, scene: Arc<PreparedScene>, cancel: CancellationToken) {
    let pacer = FramePacer::new(scene.fps);
    let timeline = Timeline::start();
    info!("animation started at {} fps", scene.fps);

    loop {
        let started = Instant::now();
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            r = tick(&client, &ctx, &scene, timeline.now()) => r,
        };

        let pause = match result {
            Ok(sent) => {
                if !sent {
                    debug!("frame unchanged, skipped");
                }
                pacer.pause_after(started.elapsed())
            }
            Err(e) if e.is_transport() => {
                warn!("error sending animation frame: {}", e);
                TX_COOLDOWN
            }
            Err(e) => {
                error!("animation loop stopped: {}", e);
                break;
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(pause) => {}
        }
    }
    info!("animation stopped");
}

/// Handle to a running loop. Dropping it does not stop the loop; call
/// [`Animation::stop`].
pub struct Animation {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Animation {
    pub fn spawn(client: Arc<UmpClient>, ctx: RenderContext, scene: Arc<PreparedScene>) -> Self {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(client, ctx, scene, cancel.clone()));
        Self { cancel, handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancel and wait for the loop to leave, so nothing more is sent.
    pub async fn stop(self) {
        self.cancel.cancel();
        if let Err(e) = self.handle.await {
            error!("animation task failed to join: {}", e);
        }
    }
}
