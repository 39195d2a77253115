//! Work production and deadline control

use std::io::Write;
use std::time::{Duration, Instant};

use crossbeam_channel::{tick, SendTimeoutError, Sender};
use tracing::debug;

use super::WorkUnit;
use crate::workload::{generate, SIZE_SPREAD};

/// Produce work units until the deadline, writing a heartbeat dot to the
/// sink once per second.
///
/// Owns the only distribution sender; returning drops it, which closes the
/// channel exactly once and is the pool's sole shutdown signal. Per
/// iteration the triggers are checked in strict priority order: deadline,
/// heartbeat, produce. A blocked send is abandoned the instant the
/// deadline passes and the unsent unit is dropped.
///
/// The first sink error is recorded and returned after the deadline;
/// production itself runs to the deadline regardless.
pub(super) fn dispatch<W: Write>(
    units: Sender<WorkUnit>,
    deadline: Instant,
    data_size: usize,
    out: &mut W,
) -> std::io::Result<()> {
    let max_size = data_size + SIZE_SPREAD;
    let mut rng = fastrand::Rng::new();
    let heartbeat = tick(Duration::from_secs(1));
    let mut sink_result = Ok(());

    loop {
        if Instant::now() >= deadline {
            break;
        }
        if heartbeat.try_recv().is_ok() {
            // ticks missed while blocked in a send coalesce to one dot
            if sink_result.is_ok() {
                sink_result = out.write_all(b" .").and_then(|_| out.flush());
            }
            continue;
        }
        let unit = generate(&mut rng, data_size, max_size);
        match units.send_deadline(unit, deadline) {
            Ok(()) => {}
            Err(SendTimeoutError::Timeout(_)) => break,
            Err(SendTimeoutError::Disconnected(_)) => {
                debug!("distribution channel closed before the deadline");
                break;
            }
        }
    }
    sink_result
}
