use serde::{Deserialize, Serialize};
use clap::{ArgAction, Parser, Subcommand, ValueHint};
use dirs_next::home_dir;
use std::{fs, path::{Path, PathBuf}, time::Duration};
use thiserror::Error;

use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_HEIGHT, DEFAULT_ICON_FONT,
    DEFAULT_ICON_META, DEFAULT_WIDTH, MAX_DIMENSION,
};
use crate::mac_addr::DeviceAddress;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// General options
    pub log_level: Option<String>,     // e.g., "info" | "debug"
    /// the panel we talk to
    pub device: Option<DeviceConfig>,
    /// where image and icon data come from
    pub media: Option<MediaConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeviceConfig {
    pub address: Option<String>,   // "AA:BB:CC:DD:EE:FF"
    pub name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MediaConfig {
    pub allowlist_external_dirs: Option<Vec<PathBuf>>,
    pub fetch_timeout_secs: Option<u64>,
    pub icon_font: Option<PathBuf>,
    pub icon_meta: Option<PathBuf>,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "umpix", about = "UMPix pixel display driver", disable_help_flag = false)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// device address, e.g. AA:BB:CC:DD:EE:FF
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum Command {
    /// Show a scene; animated scenes run until interrupted
    Draw {
        #[arg(value_hint = ValueHint::FilePath)]
        scene: PathBuf,
    },
    /// Render a scene once to a PNG file, no device needed
    Preview {
        #[arg(value_hint = ValueHint::FilePath)]
        scene: PathBuf,
        #[arg(value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },
    /// Blank the panel
    Clear,
    /// Set the panel clock from local time
    SyncTime,
    /// Power the panel on
    On,
    /// Power the panel off
    Off,
}

/// Public entry point: read YAML, merge, apply `cli`, validate.
pub fn load(cli: &Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;

    Ok(cfg)
}

/// Pretty YAML of effective config (nice for debugging)
pub fn dump_config(cfg: &Config) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(cfg)?)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/umpix/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/umpix/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/umpix.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["umpix.yaml", "config.yaml", "config/umpix.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    // top-level
    if src.log_level.is_some()      { dst.log_level = src.log_level; }
    // device
    match (&mut dst.device, src.device) {
        (None, Some(c)) => dst.device = Some(c),
        (Some(d), Some(s)) => merge_device(d, s),
        _ => {}
    }
    // media
    match (&mut dst.media, src.media) {
        (None, Some(c)) => dst.media = Some(c),
        (Some(d), Some(s)) => merge_media(d, s),
        _ => {}
    }
}

fn merge_device(dst: &mut DeviceConfig, src: DeviceConfig) {
    if src.address.is_some()               { dst.address = src.address; }
    if src.name.is_some()                  { dst.name = src.name; }
    if src.width.is_some()                 { dst.width = src.width; }
    if src.height.is_some()                { dst.height = src.height; }
    if src.connect_timeout_secs.is_some()  { dst.connect_timeout_secs = src.connect_timeout_secs; }
}

fn merge_media(dst: &mut MediaConfig, src: MediaConfig) {
    if src.allowlist_external_dirs.is_some() { dst.allowlist_external_dirs = src.allowlist_external_dirs; }
    if src.fetch_timeout_secs.is_some()      { dst.fetch_timeout_secs = src.fetch_timeout_secs; }
    if src.icon_font.is_some()               { dst.icon_font = src.icon_font; }
    if src.icon_meta.is_some()               { dst.icon_meta = src.icon_meta; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some()       { cfg.log_level = cli.log_level.clone(); }
    let any_case = cli.address.is_some()
        || cli.width.is_some()
        || cli.height.is_some();

    if any_case && cfg.device.is_none() {
        cfg.device = Some(DeviceConfig::default());
    }
    if let Some(device) = cfg.device.as_mut() {
        if cli.address.is_some()  { device.address = cli.address.clone(); }
        if cli.width.is_some()    { device.width = cli.width; }
        if cli.height.is_some()   { device.height = cli.height; }
    }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(device) = cfg.device.as_ref() {
        for (what, v) in [("width", device.width), ("height", device.height)] {
            if let Some(v) = v {
                if v == 0 || v > MAX_DIMENSION {
                    return Err(ConfigError::Validation(format!(
                        "device {} must be 1..={}", what, MAX_DIMENSION
                    )));
                }
            }
        }
        if let Some(a) = device.address.as_ref() {
            a.parse::<DeviceAddress>()
                .map_err(|e| ConfigError::Validation(format!("device address {:?}: {}", a, e)))?;
        }
        if device.connect_timeout_secs == Some(0) {
            return Err(ConfigError::Validation("device connect_timeout_secs must be > 0".into()));
        }
    }
    if let Some(media) = cfg.media.as_ref() {
        if media.fetch_timeout_secs == Some(0) {
            return Err(ConfigError::Validation("media fetch_timeout_secs must be > 0".into()));
        }
    }
    Ok(())
}

// Effective values, defaults filled in
impl Config {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    fn device_cfg(&self) -> Option<&DeviceConfig> {
        self.device.as_ref()
    }

    fn media_cfg(&self) -> Option<&MediaConfig> {
        self.media.as_ref()
    }

    pub fn width(&self) -> u32 {
        self.device_cfg().and_then(|d| d.width).unwrap_or(DEFAULT_WIDTH)
    }

    pub fn height(&self) -> u32 {
        self.device_cfg().and_then(|d| d.height).unwrap_or(DEFAULT_HEIGHT)
    }

    /// The device address; device commands cannot run without one.
    pub fn address(&self) -> Result<DeviceAddress, ConfigError> {
        let raw = self
            .device_cfg()
            .and_then(|d| d.address.as_deref())
            .ok_or_else(|| ConfigError::Validation("no device address configured".into()))?;
        raw.parse()
            .map_err(|e| ConfigError::Validation(format!("device address {:?}: {}", raw, e)))
    }

    /// Configured name, else one derived from the address.
    pub fn device_name(&self) -> Option<String> {
        if let Some(name) = self.device_cfg().and_then(|d| d.name.clone()) {
            return Some(name);
        }
        self.address().ok().map(|a| a.default_title())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.device_cfg()
                .and_then(|d| d.connect_timeout_secs)
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(
            self.media_cfg()
                .and_then(|m| m.fetch_timeout_secs)
                .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
        )
    }

    pub fn allowlist(&self) -> Vec<PathBuf> {
        self.media_cfg()
            .and_then(|m| m.allowlist_external_dirs.clone())
            .unwrap_or_default()
    }

    pub fn icon_font(&self) -> PathBuf {
        self.media_cfg()
            .and_then(|m| m.icon_font.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ICON_FONT))
    }

    pub fn icon_meta(&self) -> PathBuf {
        self.media_cfg()
            .and_then(|m| m.icon_meta.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ICON_META))
    }
}
