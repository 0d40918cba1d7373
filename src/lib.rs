#![deny(missing_docs)]

//! # rootstream
//!
//! Deterministic byte-stream generation from a shared root seed.  Two
//! machines holding the same 32-byte seed produce identical streams
//! independently; nothing is transmitted after the seed exchange.
//!
//! The generator walks a SHA-256 hash chain: every advance step hashes
//! the rolling 32-byte state together with a big-endian step counter,
//! sifts unbiased bits out of the digest with a two-bit agreement rule,
//! and XOR-folds 256 sifted bits into one 16-byte chunk.  The canonical
//! seed derives from η = 1/√2, though any `f64` or raw 32-byte seed
//! works.
//!
//! **NOT FOR CRYPTOGRAPHIC USE.**  The construction is preserved bit for
//! bit from the published reference, including its ad hoc sifting rule;
//! it makes no security or statistical-quality claims.  The
//! [`conformance`] module carries the published test vectors that pin
//! the exact output.
//!
//! ## Usage
//!
//! ```rust
//! use rootstream::{default_seed, Rootstream};
//!
//! let mut stream = Rootstream::new(default_seed());
//! let chunk = stream.next_chunk();
//! assert_eq!(hex::encode(chunk), "11ddfd55397330138a570f9f9c024996");
//! ```

pub mod conformance;
mod floats;
mod seed;
mod stream;

pub use floats::Floats;
pub use seed::{default_seed, seed_from, seed_from_hex, ETA};
pub use stream::{Rootstream, StreamState};
