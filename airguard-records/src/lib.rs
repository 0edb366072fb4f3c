//! Record ingestion for AirGuard
//!
//! Reads environmental measurement databases (CSV or JSON Lines), maps
//! each row onto the engine's four readings and filters rows by their
//! descriptive tags. The engine itself never sees the tags.
//!
//! ```rust,no_run
//! use airguard_core::Model;
//! use airguard_records::{load, Criteria};
//!
//! let model = Model::standard()?;
//! let (samples, _stats) = load("data/data.csv")?;
//!
//! for sample in Criteria::new().season("zima").filter(&samples) {
//!     let assessment = sample.evaluate(&model)?;
//!     println!("{}: {}", sample.zone, assessment);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod filter;
pub mod reader;
pub mod sample;

pub use errors::{RecordError, RecordResult};
pub use filter::{Criteria, Tag};
pub use reader::{load, ReaderStats, RecordFormat, RecordReader};
pub use sample::{EnvironmentalSample, MANUAL_TAG};
