//! Completion collector

use crossbeam_channel::Receiver;

use super::ResultTable;

/// Fold completion acknowledgements into per-worker counts until every
/// worker has dropped its completion sender.
///
/// Runs before any worker starts, so an acknowledgement can never be sent
/// without a live receiver. The returned table is frozen: the sole writer
/// hands it over by value.
pub(super) fn collect(completions: Receiver<usize>, num_workers: usize) -> ResultTable {
    let mut table = vec![0u64; num_workers];
    for id in completions {
        table[id] += 1;
    }
    table
}
