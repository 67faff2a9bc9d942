/*
 *  transport/mod.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
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

pub mod chunker;
pub mod client;
pub mod commands;
pub mod link;
pub mod mock;

#[cfg(feature = "ble")]
pub mod bluetooth;

pub use client::UmpClient;
pub use link::{BleBackend, DisconnectHook, GattConnection, LinkError};
pub use mock::MockBackend;

#[cfg(feature = "ble")]
pub use bluetooth::BtleplugBackend;
