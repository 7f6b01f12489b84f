//! DeviceCheck attestation state
//!
//! Interprets one read of a device attestation API (two opaque bits plus an
//! optional last-update month) for the token validation flow. The crate only
//! classifies; fetching the read and acting on the result belong to the caller.
//!
//! # Modules
//!
//! - `state` - [`AttestationState`] and its compliance checks
//! - `month` - [`YearMonth`] and `YYYY-MM` parsing
//! - `clock` - current-month sources ([`SystemClock`], [`FixedMonth`])
//! - `config` - reference time zone configuration
//! - `error` - [`DeviceCheckError`]
//!
//! # Example
//!
//! ```rust
//! use devicecheck_core::{AttestationState, DeviceCheckError};
//!
//! let fresh = AttestationState::new(false, false, None).unwrap();
//! assert!(fresh.is_default_configuration_compliant());
//! assert!(!fresh.used_in_current_month());
//!
//! let err = AttestationState::new(false, false, Some("2021-13")).unwrap_err();
//! assert!(matches!(err, DeviceCheckError::MalformedDate { .. }));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod month;
pub mod state;

// Re-export main types at crate root
pub use clock::{FixedMonth, MonthSource, SystemClock};
pub use config::ReferenceTimeConfig;
pub use error::{DeviceCheckError, Result};
pub use month::YearMonth;
pub use state::{Assessment, AttestationState, Configuration};
