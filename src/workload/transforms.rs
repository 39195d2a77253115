//! CPU-bound payload transforms
//!
//! Each transform runs a fixed number of iterations over one buffer and
//! perturbs a few bytes per iteration, so successive iterations digest or
//! compress slightly different input.

use std::hint::black_box;
use std::io::Write;
use std::time::Duration;

use flate2::write::GzEncoder;
use flate2::Compression;
use md5::Md5;
use sha2::{Digest, Sha256};
use tracing::error;

/// Digest rounds per sha256 work unit
pub const SHA256_ITERATIONS: usize = 10;
/// Digest rounds per md5 work unit
pub const MD5_ITERATIONS: usize = 60;
/// Compression rounds per gzip work unit
pub const GZIP_ITERATIONS: usize = 3;

/// Sleep taken by the delay transform
const DELAY: Duration = Duration::from_millis(1500);

/// Overwrite `m` bytes at random positions with random values.
pub fn mix_data(data: &mut [u8], m: usize) {
    if data.is_empty() {
        return;
    }
    for _ in 0..m {
        let idx = fastrand::usize(..data.len());
        data[idx] = fastrand::u8(..);
    }
}

/// SHA-256 load transform
pub fn sha256_rounds(data: &mut [u8]) {
    for _ in 0..SHA256_ITERATIONS {
        // black_box keeps the unused digest from being elided
        black_box(Sha256::digest(&*data));
        mix_data(data, 1);
    }
}

/// MD5 load transform
pub fn md5_rounds(data: &mut [u8]) {
    for _ in 0..MD5_ITERATIONS {
        black_box(Md5::digest(&*data));
        mix_data(data, 1);
    }
}

/// Gzip load transform
///
/// Compresses into an in-memory sink and finishes the stream before
/// returning. Write and finish failures are logged, never propagated.
pub fn gzip_rounds(data: &mut [u8]) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    for _ in 0..GZIP_ITERATIONS {
        if let Err(e) = encoder.write_all(data) {
            error!("gzip write failed: {}", e);
            return;
        }
        mix_data(data, 10);
    }
    if let Err(e) = encoder.finish() {
        error!("gzip finish failed: {}", e);
    }
}

/// Delay transform, reserved for self-tests
pub fn delay(_data: &mut [u8]) {
    std::thread::sleep(DELAY);
}
