// mac_addr.rs - panel addresses as typed by people, normalized for the BLE stack
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("device address must have 12 hex digits, got {0:?}")]
    Length(String),
    #[error("device address contains a non-hex character: {0:?}")]
    NotHex(String),
}

/// A 48-bit BLE device address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceAddress([u8; 6]);

impl DeviceAddress {
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Last three octets as six upper-case hex digits.
    pub fn short_id(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0[3], self.0[4], self.0[5])
    }

    /// Name used when none is configured, e.g. `display.DDEEFF`.
    pub fn default_title(&self) -> String {
        format!("display.{}", self.short_id())
    }
}

/// Accepts `AA:BB:CC:DD:EE:FF`, `aa-bb-cc-dd-ee-ff` and bare `aabbccddeeff`.
impl FromStr for DeviceAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.trim().chars().filter(|c| *c != ':' && *c != '-').collect();
        if digits.len() != 12 {
            return Err(AddressError::Length(s.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::NotHex(s.to_string()));
        }
        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| AddressError::NotHex(s.to_string()))?;
        }
        Ok(DeviceAddress(octets))
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}", a, b, c, d, e, g)
    }
}

impl TryFrom<String> for DeviceAddress {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DeviceAddress> for String {
    fn from(a: DeviceAddress) -> Self {
        a.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_forms_normalize() {
        for input in ["aa:bb:cc:dd:ee:ff", "AA-BB-CC-DD-EE-FF", "aabbccddeeff", " AA:BB:CC:DD:EE:FF "] {
            let addr: DeviceAddress = input.parse().unwrap();
            assert_eq!(addr.to_string(), "AA:BB:CC:DD:EE:FF");
        }
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!("AA:BB:CC".parse::<DeviceAddress>(), Err(AddressError::Length(_))));
        assert!(matches!("GG:BB:CC:DD:EE:FF".parse::<DeviceAddress>(), Err(AddressError::NotHex(_))));
        assert!("é1:BB:CC:DD:EE:F".parse::<DeviceAddress>().is_err());
    }

    #[test]
    fn test_default_title() {
        let addr: DeviceAddress = "12:34:56:ab:cd:ef".parse().unwrap();
        assert_eq!(addr.short_id(), "ABCDEF");
        assert_eq!(addr.default_title(), "display.ABCDEF");
    }

    #[test]
    fn test_serde_roundtrip_through_string() {
        let addr: DeviceAddress = serde_json::from_str("\"aa-bb-cc-dd-ee-01\"").unwrap();
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"AA:BB:CC:DD:EE:01\"");
    }
}
