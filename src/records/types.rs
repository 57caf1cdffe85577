use serde::{Deserialize, Serialize};

/// Runtime-system counters read from a canister at one instant.
///
/// `stable_memory_size` is in 64 KiB pages, the other memory fields are in
/// bytes, the instruction fields count Wasm instructions. All values are
/// non-negative at the source; a record holding a *difference* of two
/// snapshots may carry negative fields if a remote counter reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RtsData {
    pub stable_memory_size: i128,
    pub memory_size: i128,
    pub total_allocation: i128,
    pub reclaimed: i128,
    pub heap_size: i128,
    pub collector_instructions: i128,
    pub mutator_instructions: i128,
}

/// One measured update call: the snapshot delta plus the instruction count
/// the canister's own instrumentation reported for the measured region.
///
/// Field declaration order is the row order of exported sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasurementData {
    pub stable_memory_size: i128,
    pub memory_size: i128,
    pub total_allocation: i128,
    pub reclaimed: i128,
    pub heap_size: i128,
    pub instruction_count: i128,
    pub collector_instructions: i128,
    pub mutator_instructions: i128,
}

impl MeasurementData {
    /// True when every field is zero. The harness records this shape when the
    /// measured call fails, but a genuine zero-cost reading looks identical,
    /// so `true` here is not proof of failure.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
