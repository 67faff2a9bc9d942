/*
 *  lib.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Scene rendering and BLE frame streaming for pixel matrix panels
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

pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod font_data;
pub mod fonts;
pub mod glyph_cache;
pub mod icons;
pub mod mac_addr;
pub mod media;
pub mod pacer;
pub mod textlayout;
pub mod transport;
pub mod vframebuf;

pub use error::{ConnectionError, TransmissionError, UmpError, UmpResult};
