//! The hash-chain stream generator.
//!
//! A generator owns a rolling 32-byte state and a 32-bit step counter.
//! Each advance step hashes the state together with the big-endian
//! counter, replaces the state with the digest and increments the
//! counter.  Digest bytes are sifted through a two-bit agreement rule
//! until 256 bits are retained, and those bits are XOR-folded into one
//! 16-byte output chunk.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::floats::Floats;

/// Number of sifted bits collected per output chunk.
const BITS_PER_CHUNK: usize = 256;

/// Deterministic byte-stream generator backed by a SHA-256 hash chain.
///
/// Two generators constructed from the same 32-byte seed produce
/// identical chunk sequences with no further coordination.  Every call to
/// [`next_chunk`](Self::next_chunk) advances the internal state
/// permanently, so calls must be made in sequence to reproduce a given
/// stream.  A single instance must not be shared across threads without
/// external synchronization; independent instances are trivially
/// parallel.
///
/// **NOT FOR CRYPTOGRAPHIC USE.**  The construction reproduces the
/// published reference bit for bit and makes no security claims.
#[derive(Debug, Clone)]
pub struct Rootstream {
    state: [u8; 32],
    counter: u32,
}

/// Resumable snapshot of a generator.
///
/// Carries the 32-byte chain value and the advance-step counter, the
/// complete internal state of a stream.  Persisting a snapshot and
/// calling [`Rootstream::resume`] later continues the stream exactly
/// where it left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamState {
    /// Rolling hash-chain value.
    pub state: [u8; 32],
    /// Number of advance steps taken so far, modulo 2^32.
    pub counter: u32,
}

impl Rootstream {
    /// Creates a generator from a raw 32-byte seed.
    ///
    /// The initial chain value is the SHA-256 digest of the seed; this is
    /// the only place the hash is applied to fewer than 36 bytes.
    pub fn new(seed: [u8; 32]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(seed);
        Rootstream {
            state: hasher.finalize().into(),
            counter: 0,
        }
    }

    /// Restores a generator from a previously captured snapshot.
    pub fn resume(snapshot: StreamState) -> Self {
        Rootstream {
            state: snapshot.state,
            counter: snapshot.counter,
        }
    }

    /// Captures the internal state for caller-side persistence.
    pub fn snapshot(&self) -> StreamState {
        StreamState {
            state: self.state,
            counter: self.counter,
        }
    }

    /// One chain step: hash `state ‖ counter`, roll the state forward and
    /// return the digest as this step's entropy block.
    fn advance(&mut self) -> [u8; 32] {
        let mut message = [0u8; 36];
        message[..32].copy_from_slice(&self.state);
        message[32..].copy_from_slice(&self.counter.to_be_bytes());
        let mut hasher = Sha256::new();
        hasher.update(message);
        let entropy: [u8; 32] = hasher.finalize().into();
        self.state = entropy;
        self.counter = self.counter.wrapping_add(1);
        entropy
    }

    /// Collects 256 sifted bits, advancing the chain as many steps as the
    /// sift requires.  Roughly half of all digest bytes pass the sift, so
    /// a chunk typically costs about 17 chain steps, with no fixed upper
    /// bound.
    fn collect_bits(&mut self) -> [u8; BITS_PER_CHUNK] {
        let mut bits = [0u8; BITS_PER_CHUNK];
        let mut filled = 0;
        while filled < BITS_PER_CHUNK {
            let entropy = self.advance();
            for &byte in entropy.iter() {
                // sifting step: retain bit 0 only when bits 1 and 2 agree
                if (byte >> 1) & 1 == (byte >> 2) & 1 {
                    bits[filled] = byte & 1;
                    filled += 1;
                    if filled == BITS_PER_CHUNK {
                        break;
                    }
                }
            }
        }
        bits
    }

    /// Folds 256 bits into 16 bytes: output bit `i` is
    /// `bits[i] ^ bits[i + 128]`, packed most-significant-bit first.
    fn xor_fold(bits: &[u8; BITS_PER_CHUNK]) -> [u8; 16] {
        let mut out = [0u8; 16];
        for i in 0..128 {
            let bit = bits[i] ^ bits[i + 128];
            out[i / 8] |= bit << (7 - (i % 8));
        }
        out
    }

    /// Produces the next 16-byte chunk of the stream.
    ///
    /// Infallible: every input state yields a chunk.  The internal state
    /// advances irreversibly as a side effect.
    pub fn next_chunk(&mut self) -> [u8; 16] {
        let bits = self.collect_bits();
        Rootstream::xor_fold(&bits)
    }

    /// Converts the generator into an infinite stream of `f64` values in
    /// `[0, 1)`, consuming it so byte and float reads cannot interleave.
    pub fn floats(self) -> Floats {
        Floats::new(self)
    }
}

impl Iterator for Rootstream {
    type Item = [u8; 16];

    fn next(&mut self) -> Option<[u8; 16]> {
        Some(self.next_chunk())
    }
}
