/*
 *  transport/bluetooth.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Host Bluetooth backend
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
use btleplug::api::{BDAddr, Central, CentralEvent, Characteristic, Manager as _, Peripheral as _, ScanFilter, WriteType};
use btleplug::platform::{Adapter, Manager, Peripheral};
use futures::StreamExt;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::constants::{CONNECT_ATTEMPTS, CONNECT_BACKOFF, WRITE_CHARACTERISTIC};
use crate::mac_addr::DeviceAddress;
use crate::transport::link::{with_backoff, BleBackend, DisconnectHook, GattConnection, LinkError};

const SCAN_POLL: Duration = Duration::from_millis(250);
const SCAN_ROUNDS: usize = 40;

fn adapter_err(e: btleplug::Error) -> LinkError {
    LinkError::Adapter(e.to_string())
}

/// Backend bound to the first host adapter.
pub struct BtleplugBackend {
    adapter: Adapter,
    characteristic: Uuid,
}

impl BtleplugBackend {
    pub async fn new() -> Result<Self, LinkError> {
        let manager = Manager::new().await.map_err(adapter_err)?;
        let adapter = manager
            .adapters()
            .await
            .map_err(adapter_err)?
            .into_iter()
            .next()
            .ok_or_else(|| LinkError::Adapter("no bluetooth adapter found".into()))?;
        let characteristic = Uuid::parse_str(WRITE_CHARACTERISTIC)
            .map_err(|e| LinkError::Adapter(format!("bad characteristic uuid: {}", e)))?;
        info!("using bluetooth adapter {}", adapter.adapter_info().await.unwrap_or_default());
        Ok(Self { adapter, characteristic })
    }

    async fn find(&self, address: BDAddr) -> Result<Peripheral, LinkError> {
        self.adapter.start_scan(ScanFilter::default()).await.map_err(adapter_err)?;
        for _ in 0..SCAN_ROUNDS {
            for p in self.adapter.peripherals().await.map_err(adapter_err)? {
                if p.address() == address {
                    let _ = self.adapter.stop_scan().await;
                    return Ok(p);
                }
            }
            tokio::time::sleep(SCAN_POLL).await;
        }
        let _ = self.adapter.stop_scan().await;
        Err(LinkError::NotFound(address.to_string()))
    }
}

/// Connect and discover services; a half-open link is torn down on failure.
async fn establish(peripheral: &Peripheral, attempt: usize) -> Result<(), LinkError> {
    let result = async {
        peripheral.connect().await?;
        peripheral.discover_services().await
    }
    .await;
    if let Err(e) = result {
        let _ = peripheral.disconnect().await;
        return Err(LinkError::Connect(e.to_string()));
    }
    if attempt > 0 {
        info!("connected after {} retries", attempt);
    }
    Ok(())
}

#[async_trait]
impl BleBackend for BtleplugBackend {
    async fn connect(
        &self,
        address: &DeviceAddress,
        on_disconnect: DisconnectHook,
    ) -> Result<Arc<dyn GattConnection>, LinkError> {
        let peripheral = self.find(BDAddr::from(address.octets())).await?;
        with_backoff(CONNECT_ATTEMPTS, CONNECT_BACKOFF, |attempt| establish(&peripheral, attempt)).await?;

        let characteristic = peripheral
            .characteristics()
            .into_iter()
            .find(|c| c.uuid == self.characteristic)
            .ok_or_else(|| LinkError::MissingCharacteristic(self.characteristic.to_string()))?;

        // the stack reports peer drops on the adapter event stream
        let mut events = self.adapter.events().await.map_err(adapter_err)?;
        let id = peripheral.id();
        let watcher = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let CentralEvent::DeviceDisconnected(gone) = event {
                    if gone == id {
                        debug!("peer dropped the link");
                        on_disconnect();
                        break;
                    }
                }
            }
        });

        Ok(Arc::new(BtleplugConnection { peripheral, characteristic, watcher }))
    }
}

struct BtleplugConnection {
    peripheral: Peripheral,
    characteristic: Characteristic,
    watcher: tokio::task::JoinHandle<()>,
}

impl Drop for BtleplugConnection {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}

#[async_trait]
impl GattConnection for BtleplugConnection {
    async fn is_connected(&self) -> bool {
        self.peripheral.is_connected().await.unwrap_or(false)
    }

    async fn write(&self, data: &[u8], with_response: bool) -> Result<(), LinkError> {
        let kind = if with_response { WriteType::WithResponse } else { WriteType::WithoutResponse };
        self.peripheral
            .write(&self.characteristic, data, kind)
            .await
            .map_err(|e| LinkError::Write(e.to_string()))
    }

    async fn disconnect(&self) -> Result<(), LinkError> {
        self.watcher.abort();
        self.peripheral.disconnect().await.map_err(|e| LinkError::Connect(e.to_string()))
    }
}
