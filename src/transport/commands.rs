/*
 *  transport/commands.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Panel command encodings
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

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Display mode that shows frames pushed over the link.
pub const MODE_EXTERNAL_FRAME: u8 = 0;

/// Announces an image stream; written with acknowledgement.
pub const IMAGE_INIT: [u8; 10] = [10, 0, 5, 1, 0, 0, 0, 0, 0, 0];

pub fn power(on: bool) -> [u8; 7] {
    [0x06, 0x00, 0x04, 0x00, 0x01, 0x00, on as u8]
}

pub fn select_mode(mode: u8) -> [u8; 7] {
    [0x06, 0x00, 0x03, 0x00, 0x01, 0x00, mode]
}

/// Clock set: year since 2000, month, day, h, m, s, weekday with Monday = 1.
pub fn set_time(now: NaiveDateTime) -> [u8; 11] {
    let year = (now.year() - 2000).clamp(0, 255) as u8;
    [
        0x0C, 0x00,
        0x08, 0x00,
        year, now.month() as u8, now.day() as u8,
        now.hour() as u8, now.minute() as u8, now.second() as u8,
        now.weekday().number_from_monday() as u8,
    ]
}
