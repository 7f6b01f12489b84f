//! Attestation state - one DeviceCheck read and its derived checks
//!
//! Two opaque bits encode where a device sits in the token validation flow:
//!
//! ```text
//! (no record) -> 00 default -> 10 authorized -> 11 blacklisted (terminal)
//! ```
//!
//! `01` matches none of the compliant configurations and must be rejected.
//!
//! # Example
//!
//! ```rust
//! use devicecheck_core::{AttestationState, Configuration, FixedMonth, YearMonth};
//!
//! let state = AttestationState::new(true, false, Some("2021-03")).unwrap();
//! assert!(state.is_authorized_configuration_compliant());
//!
//! let march = FixedMonth(YearMonth::new(2021, 3).unwrap());
//! let assessment = state.assess(&march);
//! assert_eq!(assessment.configuration, Configuration::Authorized);
//! assert!(assessment.used_in_current_month);
//! ```

mod types;

pub use types::{Assessment, AttestationState, Configuration};
