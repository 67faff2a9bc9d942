/*
 *  transport/mock.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  In-memory BLE backend for testing and dry runs without a panel
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

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::mac_addr::DeviceAddress;
use crate::transport::commands::IMAGE_INIT;
use crate::transport::link::{BleBackend, DisconnectHook, GattConnection, LinkError};

/// One recorded write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub data: Vec<u8>,
    pub with_response: bool,
}

/// Shared state, open for inspection in tests.
#[derive(Default)]
pub struct MockBackendState {
    /// Number of connection attempts
    pub connect_count: usize,

    /// Number of disconnects requested by the client
    pub disconnect_count: usize,

    /// Every successful write, in order
    pub writes: Vec<WriteRecord>,

    /// Device not discoverable
    pub unavailable: bool,

    /// Device found but refuses the link
    pub refuse_connect: bool,

    /// Every write fails
    pub fail_writes: bool,

    /// The next N writes fail
    pub fail_next_writes: usize,

    connected: bool,
    generation: u64,
    hook: Option<DisconnectHook>,
}

/// Backend that records writes instead of talking to hardware.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockBackendState>>,
    connect_delay: Duration,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every connection attempt take `delay`.
    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = delay;
        self
    }

    pub fn state(&self) -> MutexGuard<'_, MockBackendState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn connect_count(&self) -> usize {
        self.state().connect_count
    }

    pub fn disconnect_count(&self) -> usize {
        self.state().disconnect_count
    }

    pub fn writes(&self) -> Vec<WriteRecord> {
        self.state().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.state().writes.clear();
    }

    /// Number of image streams started, counted by their initiation command.
    pub fn frames_sent(&self) -> usize {
        self.state().writes.iter().filter(|w| w.data == IMAGE_INIT).count()
    }

    pub fn is_connected(&self) -> bool {
        self.state().connected
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.state().unavailable = unavailable;
    }

    pub fn set_refuse_connect(&self, refuse: bool) {
        self.state().refuse_connect = refuse;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.state().fail_writes = fail;
    }

    pub fn fail_next_writes(&self, count: usize) {
        self.state().fail_next_writes = count;
    }

    /// Drop the link from the panel's side and fire the disconnect hook.
    pub fn peer_disconnect(&self) {
        let hook = {
            let mut state = self.state();
            state.connected = false;
            state.hook.take()
        };
        if let Some(hook) = hook {
            hook();
        }
    }
}

#[async_trait]
impl BleBackend for MockBackend {
    async fn connect(
        &self,
        address: &DeviceAddress,
        on_disconnect: DisconnectHook,
    ) -> Result<Arc<dyn GattConnection>, LinkError> {
        if !self.connect_delay.is_zero() {
            tokio::time::sleep(self.connect_delay).await;
        }
        let mut state = self.state();
        state.connect_count += 1;
        if state.unavailable {
            return Err(LinkError::NotFound(address.to_string()));
        }
        if state.refuse_connect {
            return Err(LinkError::Connect("connection refused".into()));
        }
        state.connected = true;
        state.generation += 1;
        state.hook = Some(on_disconnect);
        Ok(Arc::new(MockConnection { state: self.state.clone(), generation: state.generation }))
    }
}

struct MockConnection {
    state: Arc<Mutex<MockBackendState>>,
    generation: u64,
}

impl MockConnection {
    fn state(&self) -> MutexGuard<'_, MockBackendState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl GattConnection for MockConnection {
    async fn is_connected(&self) -> bool {
        let state = self.state();
        state.connected && state.generation == self.generation
    }

    async fn write(&self, data: &[u8], with_response: bool) -> Result<(), LinkError> {
        let mut state = self.state();
        if !state.connected || state.generation != self.generation {
            return Err(LinkError::Write("not connected".into()));
        }
        if state.fail_writes {
            return Err(LinkError::Write("simulated write failure".into()));
        }
        if state.fail_next_writes > 0 {
            state.fail_next_writes -= 1;
            return Err(LinkError::Write("simulated write failure".into()));
        }
        state.writes.push(WriteRecord { data: data.to_vec(), with_response });
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), LinkError> {
        let mut state = self.state();
        state.disconnect_count += 1;
        if state.generation == self.generation {
            state.connected = false;
            state.hook = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn addr() -> DeviceAddress {
        "AA:BB:CC:DD:EE:FF".parse().unwrap()
    }

    fn noop() -> DisconnectHook {
        Arc::new(|| {})
    }

    #[tokio::test]
    async fn test_records_writes() {
        let backend = MockBackend::new();
        let conn = backend.connect(&addr(), noop()).await.unwrap();
        conn.write(&[1, 2, 3], true).await.unwrap();
        conn.write(&IMAGE_INIT, true).await.unwrap();
        assert_eq!(backend.writes()[0], WriteRecord { data: vec![1, 2, 3], with_response: true });
        assert_eq!(backend.frames_sent(), 1);
        assert_eq!(backend.connect_count(), 1);
    }

    #[tokio::test]
    async fn test_peer_disconnect_fires_hook() {
        let backend = MockBackend::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let conn = backend
            .connect(&addr(), Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .await
            .unwrap();
        backend.peer_disconnect();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!conn.is_connected().await);
        assert!(conn.write(&[0], false).await.is_err());
    }

    #[tokio::test]
    async fn test_simulated_failures() {
        let backend = MockBackend::new();
        backend.set_unavailable(true);
        assert!(matches!(backend.connect(&addr(), noop()).await, Err(LinkError::NotFound(_))));
        backend.set_unavailable(false);
        backend.set_refuse_connect(true);
        assert!(matches!(backend.connect(&addr(), noop()).await, Err(LinkError::Connect(_))));
        backend.set_refuse_connect(false);

        let conn = backend.connect(&addr(), noop()).await.unwrap();
        backend.fail_next_writes(1);
        assert!(conn.write(&[1], false).await.is_err());
        assert!(conn.write(&[2], false).await.is_ok());
        assert_eq!(backend.connect_count(), 3);
    }

    #[tokio::test]
    async fn test_stale_connection_is_dead_after_reconnect() {
        let backend = MockBackend::new();
        let old = backend.connect(&addr(), noop()).await.unwrap();
        let new = backend.connect(&addr(), noop()).await.unwrap();
        assert!(!old.is_connected().await);
        assert!(new.is_connected().await);
        old.disconnect().await.unwrap();
        assert!(new.is_connected().await);
    }
}
