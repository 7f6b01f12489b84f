//! Reference time configuration
//!
//! "Current month" is evaluated in a single reference time zone. The zone is
//! expressed as a fixed offset from UTC in minutes; the default is UTC.

use chrono::FixedOffset;
use serde::Deserialize;

use crate::error::{DeviceCheckError, Result};

/// Environment variable overriding the reference UTC offset (minutes)
pub const UTC_OFFSET_ENV: &str = "DEVICECHECK_UTC_OFFSET_MINUTES";

const MAX_OFFSET_MINUTES: i32 = 23 * 60 + 59;

/// Time zone used when computing the current month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReferenceTimeConfig {
    /// Offset east of UTC in minutes (e.g. 60 for CET, -300 for EST)
    pub utc_offset_minutes: i32,
}

impl ReferenceTimeConfig {
    pub fn new(utc_offset_minutes: i32) -> Result<Self> {
        let config = Self { utc_offset_minutes };
        config.offset()?;
        Ok(config)
    }

    /// Parse from a JSON document, e.g. `{"utc_offset_minutes": 60}`.
    /// Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DeviceCheckError::Config(format!("invalid reference time config: {}", e)))?;
        config.offset()?;
        Ok(config)
    }

    /// Read the offset from [`UTC_OFFSET_ENV`], defaulting to UTC when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(UTC_OFFSET_ENV) {
            Ok(raw) => Self::from_env_value(&raw),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(DeviceCheckError::Config(format!("{}: {}", UTC_OFFSET_ENV, e))),
        }
    }

    fn from_env_value(raw: &str) -> Result<Self> {
        let minutes = raw.trim().parse::<i32>().map_err(|e| {
            DeviceCheckError::Config(format!("{}='{}': {}", UTC_OFFSET_ENV, raw, e))
        })?;
        Self::new(minutes)
    }

    /// The configured offset as a chrono `FixedOffset`
    pub fn offset(&self) -> Result<FixedOffset> {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(DeviceCheckError::Config(format!(
                "utc offset {} minutes exceeds +/-{}",
                self.utc_offset_minutes, MAX_OFFSET_MINUTES
            )));
        }
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            DeviceCheckError::Config(format!(
                "utc offset {} minutes is not representable",
                self.utc_offset_minutes
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utc() {
        let config = ReferenceTimeConfig::default();
        assert_eq!(config.utc_offset_minutes, 0);
        assert_eq!(config.offset().unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn test_from_json() {
        let config = ReferenceTimeConfig::from_json(r#"{"utc_offset_minutes": 60}"#).unwrap();
        assert_eq!(config.offset().unwrap().local_minus_utc(), 3600);

        let empty = ReferenceTimeConfig::from_json("{}").unwrap();
        assert_eq!(empty, ReferenceTimeConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_offset() {
        assert!(matches!(
            ReferenceTimeConfig::new(24 * 60),
            Err(DeviceCheckError::Config(_))
        ));
        assert!(ReferenceTimeConfig::new(-(24 * 60)).is_err());
        assert!(ReferenceTimeConfig::from_json(r#"{"utc_offset_minutes": 5000}"#).is_err());
        assert!(ReferenceTimeConfig::new(-MAX_OFFSET_MINUTES).is_ok());
    }

    #[test]
    fn test_env_value_parsing() {
        assert_eq!(
            ReferenceTimeConfig::from_env_value(" -300 ").unwrap().utc_offset_minutes,
            -300
        );
        assert!(ReferenceTimeConfig::from_env_value("CET").is_err());
    }
}
