/*
 *  transport/chunker.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Segment framing of encoded frames and the fixed-size units written
 *  to the link
 *
 *  Each segment of at most 65535 encoded bytes is prefixed by
 *
 *      u16 LE  length hint: low 16 bits of (encoded length + segment count)
 *      u16 LE  reserved, 0
 *      u8      flag: 0 first segment, 2 continuation
 *      u32 LE  total encoded length
 *
 *  and the concatenation of all framed segments is cut into 512 byte units.
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

use crate::constants::{
    MAX_SEGMENT, SEGMENT_FLAG_CONTINUATION, SEGMENT_FLAG_FIRST, SEGMENT_HEADER_LEN, TRANSMISSION_UNIT,
};

/// Encoded image split into segment-sized slices.
pub fn segments(encoded: &[u8]) -> std::slice::Chunks<'_, u8> {
    encoded.chunks(MAX_SEGMENT)
}

/// Header placed in front of segment `index`.
pub fn segment_header(encoded_len: usize, segment_count: usize, index: usize) -> [u8; SEGMENT_HEADER_LEN] {
    // the panel only looks at the low 16 bits
    let hint = (encoded_len + segment_count) as u16;
    let flag = if index == 0 { SEGMENT_FLAG_FIRST } else { SEGMENT_FLAG_CONTINUATION };
    let total = encoded_len as u32;

    let mut header = [0u8; SEGMENT_HEADER_LEN];
    header[0..2].copy_from_slice(&hint.to_le_bytes());
    header[2..4].copy_from_slice(&0u16.to_le_bytes());
    header[4] = flag;
    header[5..9].copy_from_slice(&total.to_le_bytes());
    header
}

/// All framed segments back to back.
pub fn frame_payload(encoded: &[u8]) -> Vec<u8> {
    let count = segments(encoded).len();
    let mut payload = Vec::with_capacity(encoded.len() + count * SEGMENT_HEADER_LEN);
    for (index, segment) in segments(encoded).enumerate() {
        payload.extend_from_slice(&segment_header(encoded.len(), count, index));
        payload.extend_from_slice(segment);
    }
    payload
}

/// The writes handed to the link, in order; only the last may be short.
pub fn transmission_units(payload: &[u8]) -> std::slice::Chunks<'_, u8> {
    payload.chunks(TRANSMISSION_UNIT)
}
