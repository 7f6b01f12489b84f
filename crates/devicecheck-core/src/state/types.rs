//! Attestation state type definitions

use std::fmt;

use tracing::{debug, warn};

use crate::clock::{MonthSource, SystemClock};
use crate::error::{DeviceCheckError, Result};
use crate::month::YearMonth;

/// One read of the device attestation API.
///
/// Immutable once built; every check is derived from the two bits and the
/// optional last-update month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttestationState {
    bit0: bool,
    bit1: bool,
    /// None if the device was never used for a validation
    last_update_month: Option<YearMonth>,
}

/// Bit-pair classification of an attestation read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Configuration {
    /// 00: fresh or long-unused device
    Default,
    /// 10: device passed a third-read authorization
    Authorized,
    /// 11: permanently flagged
    Blacklisted,
    /// 01: matches no expected configuration
    Unrecognized,
}

impl Configuration {
    pub fn from_bits(bit0: bool, bit1: bool) -> Self {
        match (bit0, bit1) {
            (false, false) => Self::Default,
            (true, false) => Self::Authorized,
            (true, true) => Self::Blacklisted,
            (false, true) => Self::Unrecognized,
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Authorized => write!(f, "authorized"),
            Self::Blacklisted => write!(f, "blacklisted"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Snapshot of every check, evaluated against a single current-month sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub configuration: Configuration,
    pub used_in_current_month: bool,
    /// The month the assessment was evaluated in
    pub current_month: YearMonth,
}

impl AttestationState {
    /// Build from the raw response. `last_update_time` is `YYYY-MM` formatted.
    pub fn new(bit0: bool, bit1: bool, last_update_time: Option<&str>) -> Result<Self> {
        let last_update_month = last_update_time
            .map(|raw| {
                raw.parse::<YearMonth>().inspect_err(|e| {
                    warn!(value = raw, error = %e, "rejecting device check read");
                })
            })
            .transpose()?;
        Ok(Self::with_month(bit0, bit1, last_update_month))
    }

    /// Build from separate year and month tokens
    pub fn from_parts(bit0: bool, bit1: bool, last_update: Option<(&str, &str)>) -> Result<Self> {
        let last_update_month = last_update
            .map(|(year, month)| {
                YearMonth::from_parts(year, month).inspect_err(|e| {
                    warn!(year, month, error = %e, "rejecting device check read");
                })
            })
            .transpose()?;
        Ok(Self::with_month(bit0, bit1, last_update_month))
    }

    pub fn with_month(bit0: bool, bit1: bool, last_update_month: Option<YearMonth>) -> Self {
        Self {
            bit0,
            bit1,
            last_update_month,
        }
    }

    pub fn bit0(&self) -> bool {
        self.bit0
    }

    pub fn bit1(&self) -> bool {
        self.bit1
    }

    pub fn last_update_month(&self) -> Option<YearMonth> {
        self.last_update_month
    }

    /// The last-update month, for code paths that already established one
    /// exists. Fails with `InvalidState` otherwise.
    pub fn require_last_update_month(&self) -> Result<YearMonth> {
        self.last_update_month.ok_or_else(|| {
            DeviceCheckError::InvalidState("device check read has no last update month".into())
        })
    }

    /// Whether the device already validated a token in the current month.
    ///
    /// Samples the UTC wall clock. Use [`Self::assess`] when several checks
    /// feed one decision.
    pub fn used_in_current_month(&self) -> bool {
        self.used_in_month(SystemClock::utc().current_month())
    }

    /// Whether the device was used in `current` or later.
    ///
    /// A future-dated last update also counts as covering `current`.
    pub fn used_in_month(&self, current: YearMonth) -> bool {
        match self.last_update_month {
            Some(last) => current <= last,
            None => false,
        }
    }

    /// Expected configuration for the first and second read: both bits false.
    ///
    /// The recency of the last update is not checked here.
    pub fn is_default_configuration_compliant(&self) -> bool {
        !self.bit0 && !self.bit1
    }

    /// Expected configuration for the third read: bit0 set, bit1 clear
    pub fn is_authorized_configuration_compliant(&self) -> bool {
        self.bit0 && !self.bit1
    }

    /// Both bits set
    pub fn is_blacklisted_configuration(&self) -> bool {
        self.bit0 && self.bit1
    }

    pub fn configuration(&self) -> Configuration {
        Configuration::from_bits(self.bit0, self.bit1)
    }

    /// Evaluate every check against one sample of `clock`
    pub fn assess(&self, clock: &impl MonthSource) -> Assessment {
        self.assess_at(clock.current_month())
    }

    pub fn assess_at(&self, current_month: YearMonth) -> Assessment {
        let assessment = Assessment {
            configuration: self.configuration(),
            used_in_current_month: self.used_in_month(current_month),
            current_month,
        };
        debug!(
            bit0 = self.bit0,
            bit1 = self.bit1,
            last_update_month = ?self.last_update_month.map(|m| m.to_string()),
            current_month = %current_month,
            configuration = %assessment.configuration,
            used_in_current_month = assessment.used_in_current_month,
            "assessed device check read"
        );
        assessment
    }
}
