//! Protocol, timing and geometry constants shared across the crate.

use std::time::Duration;

/// Panel width used when none is configured.
pub const DEFAULT_WIDTH: u32 = 32;
/// Panel height used when none is configured.
pub const DEFAULT_HEIGHT: u32 = 32;
/// Largest panel side accepted from configuration.
pub const MAX_DIMENSION: u32 = 256;

/// Animation rate when a scene does not ask for one.
pub const DEFAULT_FPS: u32 = 10;
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 30;

/// Floor on the pause between animation ticks, even when rendering overran.
pub const MIN_TICK: Duration = Duration::from_millis(10);
/// Pause after a failed frame transmission before the loop tries again.
pub const TX_COOLDOWN: Duration = Duration::from_secs(5);
/// Delay after the image initiation command so the panel can get its buffer ready.
pub const INIT_SETTLE: Duration = Duration::from_millis(50);

/// Link-layer connect attempts before giving up on a found device.
pub const CONNECT_ATTEMPTS: usize = 3;
/// Pause before the first connect retry, doubled on each further retry.
pub const CONNECT_BACKOFF: Duration = Duration::from_millis(250);

/// Seconds allowed for remote image downloads.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
/// Seconds allowed to resolve and connect to the panel.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 20;

/// The single GATT characteristic every command and frame is written to.
pub const WRITE_CHARACTERISTIC: &str = "0000fa02-0000-1000-8000-00805f9b34fb";

/// Largest slice of encoded image carried by one framed segment.
pub const MAX_SEGMENT: usize = 65_535;
/// Size of each write handed to the link.
pub const TRANSMISSION_UNIT: usize = 512;
/// Segment header: u16 length hint, u16 reserved, u8 flag, u32 true length.
pub const SEGMENT_HEADER_LEN: usize = 9;
pub const SEGMENT_FLAG_FIRST: u8 = 0;
pub const SEGMENT_FLAG_CONTINUATION: u8 = 2;

/// Icon font files looked up next to the configuration when not set.
pub const DEFAULT_ICON_FONT: &str = "materialdesignicons-webfont.ttf";
pub const DEFAULT_ICON_META: &str = "materialdesignicons-webfont_meta.json";
