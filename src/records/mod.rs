//! Fixed-shape resource records and the arithmetic over them.
//!
//! # FIELD SEMANTICS
//! Every field except `mutator_instructions` (and `instruction_count` on
//! [`types::MeasurementData`]) accumulates since canister start. Those two
//! are point-in-time readings of the last update call only, which is why
//! [`types::RtsData::difference`] copies them instead of subtracting.

pub mod algebra;
pub mod types;
