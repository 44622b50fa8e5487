pub mod check;
pub mod config;
pub mod error;
pub mod report;

pub use check::{CheckOutcome, run_check};
pub use config::{Nesting, SchemaConfig, SchemaMapping};
pub use error::ConfigError;
pub use report::{CheckReport, SchemaReport};
