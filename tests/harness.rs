use std::sync::atomic::{AtomicUsize, Ordering};

use rts_probe::{measure, MeasurementData, ProbeError, RtsData, RtsSource};

/// Serves a fixed sequence of snapshots and counts how often it was read.
struct ScriptedSource {
    snapshots: [RtsData; 2],
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(first: RtsData, second: RtsData) -> Self {
        Self {
            snapshots: [first, second],
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RtsSource for ScriptedSource {
    async fn rts_data(&self) -> Result<RtsData, ProbeError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshots[n.min(1)])
    }
}

struct FailingSource;

impl RtsSource for FailingSource {
    async fn rts_data(&self) -> Result<RtsData, ProbeError> {
        Err(ProbeError::Remote("replica unreachable".to_string()))
    }
}

fn s1() -> RtsData {
    RtsData {
        stable_memory_size: 10,
        memory_size: 100,
        total_allocation: 1000,
        reclaimed: 400,
        heap_size: 600,
        collector_instructions: 20,
        mutator_instructions: 5,
    }
}

fn s2() -> RtsData {
    RtsData {
        stable_memory_size: 12,
        memory_size: 150,
        total_allocation: 1300,
        reclaimed: 500,
        heap_size: 800,
        collector_instructions: 50,
        mutator_instructions: 7,
    }
}

#[tokio::test]
async fn measure_brackets_the_call_with_two_snapshots() {
    let source = ScriptedSource::new(s1(), s2());

    let result = measure(&source, || async { anyhow::Ok(42i128) })
        .await
        .expect("snapshot reads are scripted to succeed");

    assert_eq!(source.call_count(), 2);
    assert_eq!(
        result,
        MeasurementData {
            stable_memory_size: 2,
            memory_size: 50,
            total_allocation: 300,
            reclaimed: 100,
            heap_size: 200,
            instruction_count: 42,
            collector_instructions: 30,
            mutator_instructions: 7, // copied from S2, not subtracted
        }
    );
}

#[tokio::test]
async fn failed_call_yields_zero_sentinel_and_skips_second_snapshot() {
    let source = ScriptedSource::new(s1(), s2());

    let result = measure(&source, || async {
        Err(anyhow::anyhow!("canister trapped"))
    })
    .await
    .expect("a failing measured call is swallowed, not propagated");

    assert!(result.is_zero(), "failure is recorded as the all-zero record");
    assert_eq!(source.call_count(), 1, "second snapshot must never be fetched");
}

#[tokio::test]
async fn snapshot_read_failure_propagates() {
    let err = measure(&FailingSource, || async { anyhow::Ok(1i128) })
        .await
        .expect_err("snapshot failures are the caller's problem");

    assert!(matches!(err, ProbeError::Remote(_)));
}
