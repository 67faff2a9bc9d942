/*
 *  transport/client.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Device client: one link per panel, reconnect on demand, frame upload
 *  and the last transmitted frame
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

use chrono::{Local, NaiveDateTime};
use log::{debug, info};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Mutex as TokMutex;

use crate::constants::INIT_SETTLE;
use crate::display::canvas::Frame;
use crate::error::{ConnectionError, TransmissionError, UmpResult};
use crate::mac_addr::DeviceAddress;
use crate::transport::chunker::{frame_payload, transmission_units};
use crate::transport::commands::{self, IMAGE_INIT};
use crate::transport::link::{BleBackend, DisconnectHook, GattConnection, LinkError};

#[derive(Clone)]
struct LinkSlot {
    generation: u64,
    conn: Arc<dyn GattConnection>,
}

#[derive(Default)]
struct ConnectState {
    /// failure of the most recent attempt, handed to callers that queued behind it
    last_failure: Option<ConnectionError>,
}

struct LastFrame {
    frame: Frame,
    png: Vec<u8>,
}

type SharedSlot = Arc<Mutex<Option<LinkSlot>>>;

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

/// Talks to one panel. Cheap to share behind an `Arc`.
pub struct UmpClient {
    address: DeviceAddress,
    width: u32,
    height: u32,
    backend: Arc<dyn BleBackend>,
    connect_timeout: Duration,
    link: SharedSlot,
    connect_lock: TokMutex<ConnectState>,
    /// completed connection attempts
    attempts: AtomicU64,
    generation: AtomicU64,
    last_frame: Mutex<Option<LastFrame>>,
}

impl UmpClient {
    pub fn new(
        address: DeviceAddress,
        width: u32,
        height: u32,
        backend: Arc<dyn BleBackend>,
        connect_timeout: Duration,
    ) -> Self {
        Self {
            address,
            width,
            height,
            backend,
            connect_timeout,
            link: Arc::new(Mutex::new(None)),
            connect_lock: TokMutex::new(ConnectState::default()),
            attempts: AtomicU64::new(0),
            generation: AtomicU64::new(0),
            last_frame: Mutex::new(None),
        }
    }

    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether a link handle is currently held. Does not probe the peer.
    pub fn has_link(&self) -> bool {
        lock(&self.link).is_some()
    }

    /// Held link if it is still alive; a dead one is released.
    async fn live_link(&self) -> Option<LinkSlot> {
        let slot = lock(&self.link).clone()?;
        if slot.conn.is_connected().await {
            return Some(slot);
        }
        debug!("{} link went stale", self.address);
        release_slot(&self.link, slot.generation);
        None
    }

    pub async fn ensure_connected(&self) -> Result<(), ConnectionError> {
        self.connection().await.map(|_| ())
    }

    async fn connection(&self) -> Result<LinkSlot, ConnectionError> {
        if let Some(slot) = self.live_link().await {
            return Ok(slot);
        }

        let seen = self.attempts.load(Ordering::Acquire);
        let mut state = self.connect_lock.lock().await;

        // someone else may have connected while we waited
        if let Some(slot) = self.live_link().await {
            return Ok(slot);
        }
        // or failed, in which case we report the same failure
        if self.attempts.load(Ordering::Acquire) != seen {
            if let Some(err) = state.last_failure.clone() {
                return Err(err);
            }
        }

        let result = self.connect_once().await;
        state.last_failure = result.as_ref().err().cloned();
        self.attempts.fetch_add(1, Ordering::AcqRel);
        result
    }

    async fn connect_once(&self) -> Result<LinkSlot, ConnectionError> {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let address = self.address.to_string();
        info!("connecting to {}", address);

        let hook: DisconnectHook = {
            let link = Arc::downgrade(&self.link);
            let address = address.clone();
            Arc::new(move || {
                if let Some(link) = link.upgrade() {
                    if release_slot(&link, generation) {
                        info!("{} disconnected", address);
                    }
                }
            })
        };

        let conn = match tokio::time::timeout(self.connect_timeout, self.backend.connect(&self.address, hook)).await {
            Err(_) => return Err(ConnectionError::Timeout(address)),
            Ok(Err(LinkError::NotFound(_))) => return Err(ConnectionError::Unavailable(address)),
            Ok(Err(e)) => return Err(ConnectionError::Failed { address, reason: e.to_string() }),
            Ok(Ok(conn)) => conn,
        };

        let slot = LinkSlot { generation, conn };
        *lock(&self.link) = Some(slot.clone());
        info!("connected to {}", address);
        Ok(slot)
    }

    /// Write to the panel, connecting first if needed. A failed write
    /// drops the link so the next call reconnects.
    pub async fn write(&self, data: &[u8], with_response: bool) -> UmpResult<()> {
        let slot = self.connection().await?;
        self.write_on(&slot, data, with_response).await
    }

    async fn write_on(&self, slot: &LinkSlot, data: &[u8], with_response: bool) -> UmpResult<()> {
        // the peer may have gone between two units of one frame
        let held = lock(&self.link).as_ref().map(|s| s.generation);
        if held != Some(slot.generation) {
            return Err(TransmissionError::NotConnected.into());
        }
        match slot.conn.write(data, with_response).await {
            Ok(()) => Ok(()),
            Err(e) => {
                info!("write to {} failed, dropping link: {}", self.address, e);
                self.drop_link(slot).await;
                Err(TransmissionError::Write { reason: e.to_string() }.into())
            }
        }
    }

    async fn drop_link(&self, slot: &LinkSlot) {
        release_slot(&self.link, slot.generation);
        if let Err(e) = slot.conn.disconnect().await {
            debug!("ignoring disconnect error: {}", e);
        }
    }

    /// Release the link, if any.
    pub async fn disconnect(&self) {
        let slot = lock(&self.link).take();
        if let Some(slot) = slot {
            if let Err(e) = slot.conn.disconnect().await {
                debug!("ignoring disconnect error: {}", e);
            }
            info!("disconnected from {}", self.address);
        }
    }

    pub async fn set_state(&self, on: bool) -> UmpResult<()> {
        self.write(&commands::power(on), false).await
    }

    pub async fn set_mode(&self, mode: u8) -> UmpResult<()> {
        self.write(&commands::select_mode(mode), false).await
    }

    pub async fn sync_time_at(&self, now: NaiveDateTime) -> UmpResult<()> {
        self.write(&commands::set_time(now), false).await
    }

    pub async fn sync_time(&self) -> UmpResult<()> {
        self.sync_time_at(Local::now().naive_local()).await
    }

    /// Send an all-black frame.
    pub async fn clear(&self) -> UmpResult<()> {
        self.send_frame(&Frame::blank(self.width, self.height)).await
    }

    /// Stream an encoded image: acknowledged initiation, a short settle,
    /// then unacknowledged units.
    pub async fn send_png(&self, png: &[u8]) -> UmpResult<()> {
        let payload = frame_payload(png);
        let slot = self.connection().await?;
        self.write_on(&slot, &IMAGE_INIT, true).await?;
        tokio::time::sleep(INIT_SETTLE).await;
        for unit in transmission_units(&payload) {
            self.write_on(&slot, unit, false).await?;
        }
        debug!("sent {} byte frame in {} units", png.len(), transmission_units(&payload).len());
        Ok(())
    }

    /// Resize to the panel, encode, send, then remember it as the last frame.
    pub async fn send_frame(&self, frame: &Frame) -> UmpResult<()> {
        let frame = frame.resized(self.width, self.height);
        let png = frame.to_png()?;
        self.send_png(&png).await?;
        *lock(&self.last_frame) = Some(LastFrame { frame, png });
        Ok(())
    }

    /// Send only when the pixels differ from the last transmitted frame.
    /// Returns whether anything was sent.
    pub async fn send_frame_if_changed(&self, frame: &Frame) -> UmpResult<bool> {
        let frame = frame.resized(self.width, self.height);
        let unchanged = lock(&self.last_frame)
            .as_ref()
            .is_some_and(|last| last.frame.as_bytes() == frame.as_bytes());
        if unchanged {
            return Ok(false);
        }
        self.send_frame(&frame).await?;
        Ok(true)
    }

    pub fn last_frame(&self) -> Option<Frame> {
        lock(&self.last_frame).as_ref().map(|last| last.frame.clone())
    }

    /// Last transmitted frame as PNG, or a black frame before anything was sent.
    pub fn last_frame_png(&self) -> UmpResult<Vec<u8>> {
        if let Some(last) = lock(&self.last_frame).as_ref() {
            return Ok(last.png.clone());
        }
        Ok(Frame::blank(self.width, self.height).to_png()?)
    }
}

/// Clear `link` if it still holds `generation`. True when something was released.
fn release_slot(link: &Mutex<Option<LinkSlot>>, generation: u64) -> bool {
    let mut guard = lock(link);
    if guard.as_ref().is_some_and(|s| s.generation == generation) {
        *guard = None;
        return true;
    }
    if guard.is_some() {
        debug!("ignoring release of superseded link {}", generation);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UmpError;
    use crate::transport::mock::MockBackend;

    fn client(backend: &MockBackend) -> UmpClient {
        UmpClient::new(
            "AA:BB:CC:DD:EE:FF".parse().unwrap(),
            4,
            4,
            Arc::new(backend.clone()),
            Duration::from_secs(20),
        )
    }

    #[tokio::test]
    async fn test_connects_once_and_reuses_link() {
        let backend = MockBackend::new();
        let c = client(&backend);
        c.set_state(true).await.unwrap();
        c.set_mode(0).await.unwrap();
        assert_eq!(backend.connect_count(), 1);
        let writes = backend.writes();
        assert_eq!(writes[0].data, commands::power(true));
        assert!(!writes[0].with_response);
        assert_eq!(writes[1].data, commands::select_mode(0));
    }

    #[tokio::test]
    async fn test_connection_errors_are_classified() {
        let backend = MockBackend::new();
        let c = client(&backend);
        backend.set_unavailable(true);
        let err = c.ensure_connected().await.unwrap_err();
        assert_eq!(err, ConnectionError::Unavailable("AA:BB:CC:DD:EE:FF".into()));

        backend.set_unavailable(false);
        backend.set_refuse_connect(true);
        assert!(matches!(c.ensure_connected().await, Err(ConnectionError::Failed { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_timeout() {
        let backend = MockBackend::new().with_connect_delay(Duration::from_secs(60));
        let c = client(&backend);
        assert!(matches!(c.ensure_connected().await, Err(ConnectionError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_failed_write_drops_link_and_next_write_reconnects() {
        let backend = MockBackend::new();
        let c = client(&backend);
        c.ensure_connected().await.unwrap();
        backend.fail_next_writes(1);
        let err = c.set_mode(0).await.unwrap_err();
        assert!(err.is_transport());
        assert!(!c.has_link());
        assert_eq!(backend.disconnect_count(), 1);

        c.set_mode(0).await.unwrap();
        assert_eq!(backend.connect_count(), 2);
    }

    #[tokio::test]
    async fn test_peer_disconnect_clears_link() {
        let backend = MockBackend::new();
        let c = client(&backend);
        c.ensure_connected().await.unwrap();
        assert!(c.has_link());
        backend.peer_disconnect();
        assert!(!c.has_link());
        c.ensure_connected().await.unwrap();
        assert_eq!(backend.connect_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_frame_upload_sequence() {
        let backend = MockBackend::new();
        let c = client(&backend);
        let frame = Frame::blank(4, 4);
        c.send_frame(&frame).await.unwrap();

        let writes = backend.writes();
        assert_eq!(writes[0].data, IMAGE_INIT);
        assert!(writes[0].with_response);
        assert!(writes[1..].iter().all(|w| !w.with_response && w.data.len() <= 512));

        let png = frame.to_png().unwrap();
        let streamed: Vec<u8> = writes[1..].iter().flat_map(|w| w.data.clone()).collect();
        assert_eq!(streamed, frame_payload(&png));
        assert_eq!(c.last_frame_png().unwrap(), png);
    }

    #[tokio::test(start_paused = true)]
    async fn test_peer_drop_during_settle_stops_stream() {
        let backend = MockBackend::new();
        let c = Arc::new(client(&backend));
        let sender = {
            let c = c.clone();
            tokio::spawn(async move { c.clear().await })
        };
        tokio::time::sleep(INIT_SETTLE / 2).await;
        backend.peer_disconnect();

        let err = sender.await.unwrap().unwrap_err();
        assert!(matches!(err, UmpError::Transmission(TransmissionError::NotConnected)));
        assert_eq!(backend.writes().len(), 1);
        assert!(c.last_frame().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_frame_is_not_resent() {
        let backend = MockBackend::new();
        let c = client(&backend);
        let frame = Frame::blank(4, 4);
        assert!(c.send_frame_if_changed(&frame).await.unwrap());
        assert!(!c.send_frame_if_changed(&frame).await.unwrap());
        assert_eq!(backend.frames_sent(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_frames_are_resized_to_panel() {
        let backend = MockBackend::new();
        let c = client(&backend);
        c.send_frame(&Frame::blank(8, 2)).await.unwrap();
        let last = c.last_frame().unwrap();
        assert_eq!((last.width(), last.height()), (4, 4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_frame_kept_when_send_fails() {
        let backend = MockBackend::new();
        let c = client(&backend);
        backend.set_fail_writes(true);
        assert!(c.clear().await.is_err());
        assert!(c.last_frame().is_none());
        // readback still yields a decodable black frame
        let png = c.last_frame_png().unwrap();
        assert_eq!(Frame::from_png(&png).unwrap(), Frame::blank(4, 4));
    }
}
