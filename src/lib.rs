pub mod actor;
pub mod error;
pub mod export;
pub mod measure;
pub mod records;

// Re-export the surface most callers need
pub use error::ProbeError;
pub use measure::harness::{measure, RtsSource};
pub use records::types::{MeasurementData, RtsData};
