use super::types::{MeasurementData, RtsData};

impl RtsData {
    /// Field-wise delta between two snapshots bracketing an update call.
    ///
    /// `mutator_instructions` is copied from `self` (the newer snapshot)
    /// rather than subtracted: the canister reports it per call, not
    /// cumulatively.
    pub fn difference(&self, older: &RtsData) -> RtsData {
        RtsData {
            stable_memory_size: self.stable_memory_size - older.stable_memory_size,
            memory_size: self.memory_size - older.memory_size,
            total_allocation: self.total_allocation - older.total_allocation,
            reclaimed: self.reclaimed - older.reclaimed,
            heap_size: self.heap_size - older.heap_size,
            collector_instructions: self.collector_instructions - older.collector_instructions,
            mutator_instructions: self.mutator_instructions,
        }
    }

    /// Field-wise sum, point-in-time fields included. Totals the usage of
    /// several independent calls.
    pub fn sum(&self, other: &RtsData) -> RtsData {
        RtsData {
            stable_memory_size: self.stable_memory_size + other.stable_memory_size,
            memory_size: self.memory_size + other.memory_size,
            total_allocation: self.total_allocation + other.total_allocation,
            reclaimed: self.reclaimed + other.reclaimed,
            heap_size: self.heap_size + other.heap_size,
            collector_instructions: self.collector_instructions + other.collector_instructions,
            mutator_instructions: self.mutator_instructions + other.mutator_instructions,
        }
    }

    /// Literal field-wise subtraction, point-in-time fields included.
    ///
    /// Not for before/after snapshot deltas: use [`RtsData::difference`]
    /// there, or `mutator_instructions` comes out as the change between two
    /// unrelated per-call readings.
    pub fn raw_subtract(&self, other: &RtsData) -> RtsData {
        RtsData {
            stable_memory_size: self.stable_memory_size - other.stable_memory_size,
            memory_size: self.memory_size - other.memory_size,
            total_allocation: self.total_allocation - other.total_allocation,
            reclaimed: self.reclaimed - other.reclaimed,
            heap_size: self.heap_size - other.heap_size,
            collector_instructions: self.collector_instructions - other.collector_instructions,
            mutator_instructions: self.mutator_instructions - other.mutator_instructions,
        }
    }
}

impl MeasurementData {
    /// The [`RtsData::difference`] of two snapshots with the externally
    /// measured instruction count attached.
    pub fn from_difference(newer: &RtsData, older: &RtsData, instruction_count: i128) -> MeasurementData {
        let delta = newer.difference(older);
        MeasurementData {
            stable_memory_size: delta.stable_memory_size,
            memory_size: delta.memory_size,
            total_allocation: delta.total_allocation,
            reclaimed: delta.reclaimed,
            heap_size: delta.heap_size,
            instruction_count,
            collector_instructions: delta.collector_instructions,
            mutator_instructions: delta.mutator_instructions,
        }
    }

    /// Field-wise sum of two measurements, for aggregating multiple calls.
    pub fn sum(&self, other: &MeasurementData) -> MeasurementData {
        MeasurementData {
            stable_memory_size: self.stable_memory_size + other.stable_memory_size,
            memory_size: self.memory_size + other.memory_size,
            total_allocation: self.total_allocation + other.total_allocation,
            reclaimed: self.reclaimed + other.reclaimed,
            heap_size: self.heap_size + other.heap_size,
            instruction_count: self.instruction_count + other.instruction_count,
            collector_instructions: self.collector_instructions + other.collector_instructions,
            mutator_instructions: self.mutator_instructions + other.mutator_instructions,
        }
    }

    /// Literal field-wise subtraction across all eight fields. Same caveat as
    /// [`RtsData::raw_subtract`].
    pub fn raw_subtract(&self, other: &MeasurementData) -> MeasurementData {
        MeasurementData {
            stable_memory_size: self.stable_memory_size - other.stable_memory_size,
            memory_size: self.memory_size - other.memory_size,
            total_allocation: self.total_allocation - other.total_allocation,
            reclaimed: self.reclaimed - other.reclaimed,
            heap_size: self.heap_size - other.heap_size,
            instruction_count: self.instruction_count - other.instruction_count,
            collector_instructions: self.collector_instructions - other.collector_instructions,
            mutator_instructions: self.mutator_instructions - other.mutator_instructions,
        }
    }

    /// Net out a previously measured overhead record, isolating the cost of
    /// interest. Every field is subtracted except `mutator_instructions`,
    /// which stays as read (it is the literal last-call figure, not an
    /// accumulator to net out).
    ///
    /// A failed measurement (`instruction_count == 0`) is returned untouched:
    /// nothing ran, so there is no overhead to remove.
    pub fn purify(&self, baseline: &MeasurementData) -> MeasurementData {
        if self.instruction_count == 0 {
            return *self;
        }
        MeasurementData {
            stable_memory_size: self.stable_memory_size - baseline.stable_memory_size,
            memory_size: self.memory_size - baseline.memory_size,
            total_allocation: self.total_allocation - baseline.total_allocation,
            reclaimed: self.reclaimed - baseline.reclaimed,
            heap_size: self.heap_size - baseline.heap_size,
            instruction_count: self.instruction_count - baseline.instruction_count,
            collector_instructions: self.collector_instructions - baseline.collector_instructions,
            mutator_instructions: self.mutator_instructions,
        }
    }
}
