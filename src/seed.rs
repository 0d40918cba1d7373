//! Seed derivation from a scalar root constant.
//!
//! A stream seed is always exactly 32 bytes.  The canonical derivation
//! starts from a single `f64`, reinterprets its IEEE-754 bit pattern as
//! eight little-endian bytes and repeats that block four times.  The
//! reference configuration seeds from η = 1/√2, but any finite or
//! non-finite double derives a seed deterministically from its bit
//! pattern.

/// The root constant η = 1/√2 that seeds the reference stream.
pub const ETA: f64 = 0.7071067811865476;

/// Derives a 32-byte seed from an arbitrary `f64`.
///
/// The seed is the little-endian encoding of the value's IEEE-754 bit
/// pattern, repeated four times.  The mapping is total: NaN and the
/// infinities are accepted and map from their bit patterns like any
/// other value.
pub fn seed_from(value: f64) -> [u8; 32] {
    let block = value.to_bits().to_le_bytes();
    let mut seed = [0u8; 32];
    for chunk in seed.chunks_exact_mut(8) {
        chunk.copy_from_slice(&block);
    }
    seed
}

/// Returns the seed derived from [`ETA`], reproducing the reference stream.
pub fn default_seed() -> [u8; 32] {
    seed_from(ETA)
}

/// Parses a 64-character hex string into a 32-byte seed.
///
/// Seeds exchanged out of band are conventionally rendered as lowercase
/// hex; this accepts either case.
pub fn seed_from_hex(encoded: &str) -> Result<[u8; 32], String> {
    let bytes = hex::decode(encoded).map_err(|e| format!("bad seed hex: {e}"))?;
    if bytes.len() != 32 {
        return Err(format!("seed must be 32 bytes, got {}", bytes.len()));
    }
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&bytes);
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::{default_seed, seed_from, seed_from_hex, ETA};
    use proptest::prelude::*;

    #[test]
    fn test_default_seed_replicates_eta_pattern() {
        let eta_block = ETA.to_bits().to_le_bytes();
        assert_eq!(eta_block, [0xcd, 0x3b, 0x7f, 0x66, 0x9e, 0xa0, 0xe6, 0x3f]);
        let seed = default_seed();
        for chunk in seed.chunks_exact(8) {
            assert_eq!(chunk, &eta_block[..]);
        }
    }

    #[test]
    fn test_seed_from_hex_round_trip() {
        let seed = default_seed();
        let parsed = seed_from_hex(&hex::encode(seed)).unwrap();
        assert_eq!(parsed, seed);
    }

    #[test]
    fn test_seed_from_hex_rejects_bad_input() {
        assert!(seed_from_hex("cd3b").unwrap_err().contains("32 bytes"));
        assert!(seed_from_hex(&"zz".repeat(32)).unwrap_err().contains("bad seed hex"));
    }

    proptest! {
        #[test]
        fn test_seed_blocks_replicate(value in any::<f64>()) {
            let seed = seed_from(value);
            let block = value.to_bits().to_le_bytes();
            for chunk in seed.chunks_exact(8) {
                prop_assert_eq!(chunk, &block[..]);
            }
        }
    }
}
