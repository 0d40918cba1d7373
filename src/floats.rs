//! Float adapter over the chunk stream.

use crate::stream::Rootstream;

/// 2^64 as an `f64`; exact, since it is a power of two.
const WORD_SPAN: f64 = 18_446_744_073_709_551_616.0;

/// Infinite iterator of `f64` values in `[0, 1)` drawn from a chunk
/// stream.
///
/// Each 16-byte chunk is consumed as two big-endian `u64` words in
/// order; a word `w` maps to `w / 2^64`.  Useful for deriving
/// coordinates or parameters deterministically from a shared seed.
#[derive(Debug, Clone)]
pub struct Floats {
    stream: Rootstream,
    pending: Option<u64>,
}

impl Floats {
    pub(crate) fn new(stream: Rootstream) -> Self {
        Floats {
            stream,
            pending: None,
        }
    }
}

impl Iterator for Floats {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if let Some(word) = self.pending.take() {
            return Some(word as f64 / WORD_SPAN);
        }
        let chunk = self.stream.next_chunk();
        let mut head = [0u8; 8];
        let mut tail = [0u8; 8];
        head.copy_from_slice(&chunk[..8]);
        tail.copy_from_slice(&chunk[8..]);
        self.pending = Some(u64::from_be_bytes(tail));
        Some(u64::from_be_bytes(head) as f64 / WORD_SPAN)
    }
}
