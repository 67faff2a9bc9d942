/*
 *  transport/link.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Seams between the device client and a BLE stack
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
use log::debug;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::mac_addr::DeviceAddress;

/// Called by a backend when the peer drops the link.
pub type DisconnectHook = Arc<dyn Fn() + Send + Sync>;

/// Failures reported by a BLE backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("device not found: {0}")]
    NotFound(String),
    #[error("connect failed: {0}")]
    Connect(String),
    #[error("characteristic {0} not found")]
    MissingCharacteristic(String),
    #[error("write failed: {0}")]
    Write(String),
    #[error("adapter error: {0}")]
    Adapter(String),
}

/// An established GATT link to one panel.
#[async_trait]
pub trait GattConnection: Send + Sync {
    async fn is_connected(&self) -> bool;

    /// Write to the panel's command characteristic.
    async fn write(&self, data: &[u8], with_response: bool) -> Result<(), LinkError>;

    async fn disconnect(&self) -> Result<(), LinkError>;
}

/// Resolves a device by address and opens a link to it.
#[async_trait]
pub trait BleBackend: Send + Sync {
    /// Connect, retrying with backoff at the link layer.
    /// `on_disconnect` must fire when the peer goes away.
    async fn connect(
        &self,
        address: &DeviceAddress,
        on_disconnect: DisconnectHook,
    ) -> Result<Arc<dyn GattConnection>, LinkError>;
}

/// Run `op` up to `attempts` times, sleeping `first_pause` after the first
/// failure and twice as long after each one that follows.
/// `op` gets the zero based attempt number and must clean up after itself.
pub async fn with_backoff<T, F, Fut>(attempts: usize, first_pause: Duration, mut op: F) -> Result<T, LinkError>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<T, LinkError>>,
{
    let mut pause = first_pause;
    let mut attempt = 0;
    loop {
        match op(attempt).await {
            Ok(v) => return Ok(v),
            Err(e) if attempt + 1 < attempts.max(1) => {
                debug!("link attempt {} failed: {}, retrying in {:?}", attempt + 1, e, pause);
                tokio::time::sleep(pause).await;
                pause *= 2;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
