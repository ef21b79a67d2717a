//! # market_core: Foundation Types for Synthetic Market Data
//!
//! ## Layer 1 (Foundation) Role
//!
//! market_core is the bottom layer of the workspace, providing:
//! - Time types: `Date` (`types::time`)
//! - Currency types: `Currency` (`types::currency`)
//! - Error types: `DateError`, `CurrencyError` (`types::error`)
//! - Weekend-only business day arithmetic (`calendar`)
//! - Seeded, owned random streams (`rng`)
//!
//! Layer 1 has no dependencies on other workspace crates.
//!
//! ## Usage Examples
//!
//! ```rust
//! use market_core::calendar::BusinessCalendar;
//! use market_core::rng::SynthRng;
//! use market_core::types::{Currency, Date};
//!
//! // Business day arithmetic
//! let friday = Date::from_ymd(2025, 8, 15).unwrap();
//! let settled = BusinessCalendar::new().add_business_days(friday, 7).unwrap();
//! assert_eq!(settled, Date::from_ymd(2025, 8, 26).unwrap());
//!
//! // Currency information
//! assert_eq!(Currency::ZAR.code(), "ZAR");
//!
//! // Reproducible draws
//! let (mut a, mut b) = (vec![0.0; 4], vec![0.0; 4]);
//! SynthRng::from_seed(42).fill_uniform(&mut a);
//! SynthRng::from_seed(42).fill_uniform(&mut b);
//! assert_eq!(a, b);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod calendar;
pub mod rng;
pub mod types;
