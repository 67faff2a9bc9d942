/*
 *  error.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Transport and device error taxonomy
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

use thiserror::Error;

/// The panel could not be reached.
///
/// `Clone` so every caller waiting on one connection attempt sees the same outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("device {0} not found")]
    Unavailable(String),
    #[error("connecting to {address} failed: {reason}")]
    Failed { address: String, reason: String },
    #[error("timed out connecting to {0}")]
    Timeout(String),
}

/// A write on an established link failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransmissionError {
    #[error("write failed: {reason}")]
    Write { reason: String },
    #[error("link dropped before the write")]
    NotConnected,
}

/// Anything a device operation can fail with.
#[derive(Debug, Error)]
pub enum UmpError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    #[error(transparent)]
    Transmission(#[from] TransmissionError),
    #[error("frame encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl UmpError {
    /// Link trouble that a later attempt may get past.
    pub fn is_transport(&self) -> bool {
        matches!(self, UmpError::Connection(_) | UmpError::Transmission(_))
    }
}

pub type UmpResult<T> = Result<T, UmpError>;
