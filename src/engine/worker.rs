//! Worker loop

use crossbeam_channel::{Receiver, Sender};
use tracing::warn;

use super::WorkUnit;
use crate::workload::Algorithm;

/// Pull units until the distribution channel closes, applying the
/// algorithm and acknowledging each completed unit with this worker's
/// identity.
///
/// The worker never closes its own input; it exits only when the
/// dispatcher drops the distribution sender. Dropping the completion
/// sender on exit is the worker's terminal signal to the collector, and
/// the thread's join handle is its terminal signal to the orchestrator.
pub(super) fn work(
    id: usize,
    units: Receiver<WorkUnit>,
    completions: Sender<usize>,
    algorithm: Algorithm,
) {
    for mut unit in units {
        algorithm.apply(&mut unit);
        if completions.send(id).is_err() {
            warn!("worker {} exiting: completion channel closed early", id);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use std::thread;

    #[test]
    fn test_unit_in_identity_out() {
        for algorithm in Algorithm::PRODUCTION {
            let (unit_tx, unit_rx) = bounded::<WorkUnit>(0);
            let (done_tx, done_rx) = bounded::<usize>(0);
            let handle = thread::spawn(move || work(3, unit_rx, done_tx, algorithm));

            unit_tx.send(vec![0u8; 64]).unwrap();
            assert_eq!(done_rx.recv().unwrap(), 3);

            drop(unit_tx);
            handle.join().unwrap();
            // worker dropped its sender on exit
            assert!(done_rx.recv().is_err());
        }
    }

    #[test]
    fn test_channel_close_exits_cleanly() {
        let (unit_tx, unit_rx) = bounded::<WorkUnit>(0);
        let (done_tx, done_rx) = bounded::<usize>(0);
        let handle = thread::spawn(move || work(0, unit_rx, done_tx, Algorithm::Sha256));

        drop(unit_tx);
        handle.join().unwrap();
        assert!(done_rx.recv().is_err());
    }

    #[test]
    fn test_collector_gone_does_not_panic() {
        let (unit_tx, unit_rx) = bounded::<WorkUnit>(0);
        let (done_tx, done_rx) = bounded::<usize>(0);
        drop(done_rx);
        let handle = thread::spawn(move || work(0, unit_rx, done_tx, Algorithm::Sha256));

        unit_tx.send(vec![0u8; 16]).unwrap();
        handle.join().unwrap();
    }
}
