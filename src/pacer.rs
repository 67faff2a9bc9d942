/*
 *  pacer.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Frame pacing for the animation loop
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
use std::time::Duration;

use crate::constants::{MAX_FPS, MIN_FPS, MIN_TICK};

/// Works out how long to sleep after each tick so ticks land at the
/// target rate, without ever spinning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    frame: Duration,
    floor: Duration,
}

// BLE throughput tops out well below 30 frames a second on real panels,
// the upper clamp just keeps a runaway request from hogging the link
impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self { frame: Self::period_for(target_fps), floor: MIN_TICK }
    }

    fn period_for(fps: u32) -> Duration {
        Duration::from_micros(1_000_000 / fps.clamp(MIN_FPS, MAX_FPS) as u64)
    }

    pub fn period(&self) -> Duration {
        self.frame
    }

    /// Sleep owed after a tick that took `elapsed`.
    #[inline]
    pub fn pause_after(&self, elapsed: Duration) -> Duration {
        self.frame.saturating_sub(elapsed).max(self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_is_clamped() {
        assert_eq!(FramePacer::new(10).period(), Duration::from_millis(100));
        assert_eq!(FramePacer::new(0).period(), Duration::from_secs(1));
        assert_eq!(FramePacer::new(500).period(), Duration::from_micros(33_333));
    }

    #[test]
    fn test_pause_subtracts_render_time() {
        let pacer = FramePacer::new(10);
        assert_eq!(pacer.pause_after(Duration::from_millis(30)), Duration::from_millis(70));
        assert_eq!(pacer.pause_after(Duration::ZERO), Duration::from_millis(100));
    }

    #[test]
    fn test_pause_never_below_floor() {
        let pacer = FramePacer::new(30);
        assert_eq!(pacer.pause_after(Duration::from_millis(32)), MIN_TICK);
        assert_eq!(pacer.pause_after(Duration::from_secs(2)), MIN_TICK);
        assert_eq!(FramePacer::new(1).pause_after(Duration::from_millis(995)), MIN_TICK);
    }
}
