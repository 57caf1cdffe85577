//! Brackets one remote call between two counter snapshots.
//!
//! # ORDERING INVARIANT
//! snapshot -> measured call -> snapshot, strictly sequential. Concurrent
//! measurements against the *same* canister corrupt the cumulative fields:
//! an overlapping window reads foreign activity into the delta.

use std::future::Future;

use tracing::warn;

use crate::error::ProbeError;
use crate::records::types::{MeasurementData, RtsData};

/// The snapshot half of the two-call contract a measurable canister handle
/// must speak. The measured operation itself is supplied by the caller as a
/// future, so the harness never sees its shape.
pub trait RtsSource {
    fn rts_data(&self) -> impl Future<Output = Result<RtsData, ProbeError>> + Send;
}

/// Measure the resource cost of one update call against `source`.
///
/// `op` performs the call and returns the instruction count the canister's
/// instrumentation reported for it. If `op` fails, the failure is logged and
/// swallowed: the result is the all-zero [`MeasurementData`] and the second
/// snapshot is never fetched. Snapshot read failures are not recovered and
/// propagate to the caller.
pub async fn measure<S, F, Fut>(source: &S, op: F) -> Result<MeasurementData, ProbeError>
where
    S: RtsSource,
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<i128>>,
{
    let before = source.rts_data().await?;

    let instruction_count = match op().await {
        Ok(count) => count,
        Err(e) => {
            warn!(error = %e, "measured call failed, recording zero measurement");
            return Ok(MeasurementData::default());
        }
    };

    let after = source.rts_data().await?;
    Ok(MeasurementData::from_difference(&after, &before, instruction_count))
}
