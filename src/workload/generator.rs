//! Randomized buffer generation

use fastrand::Rng;

/// Headroom added on top of the configured data size when picking a
/// buffer length
pub const SIZE_SPREAD: usize = 16;

/// Generate a pseudo-random buffer with length uniform in `[min, max)`.
///
/// Degenerates to exactly `min` bytes when `max <= min`. The source
/// advances on every call, so repeated calls over the same range yield
/// different content.
pub fn generate(rng: &mut Rng, min: usize, max: usize) -> Vec<u8> {
    let mut len = min;
    if max > min {
        len += rng.usize(..max - min);
    }
    let mut buf = vec![0u8; len];
    rng.fill(&mut buf);
    buf
}
