//! Randomness capability.
//!
//! Every operation that consumes randomness takes the generator as an
//! explicit `&mut R where R: RngCore + CryptoRng`. Production entry points
//! pass [`OsRng`](rand::rngs::OsRng); tests pass a seeded `StdRng`.
//!
//! Generator failures are never retried: they surface as
//! [`CryptoError::RandomnessUnavailable`].

use rand::{CryptoRng, RngCore};

use crate::error::CryptoError;

/// Fill `buf` from `rng`.
///
/// # Errors
///
/// Returns `CryptoError::RandomnessUnavailable` if the generator fails.
pub fn fill<R: RngCore + CryptoRng>(rng: &mut R, buf: &mut [u8]) -> Result<(), CryptoError> {
    rng.try_fill_bytes(buf)
        .map_err(|e| CryptoError::RandomnessUnavailable(format!("CSPRNG fill failed: {e}")))
}

/// Draw a fixed-size array from `rng`.
///
/// # Errors
///
/// Returns `CryptoError::RandomnessUnavailable` if the generator fails.
pub fn random_array<R: RngCore + CryptoRng, const N: usize>(
    rng: &mut R,
) -> Result<[u8; N], CryptoError> {
    let mut out = [0u8; N];
    fill(rng, &mut out)?;
    Ok(out)
}

/// Draw a uniformly distributed index in `0..bound`.
///
/// Uses rejection sampling over 32-bit draws so that no index is favoured
/// when `bound` does not divide 2^32.
///
/// # Errors
///
/// Returns `CryptoError::RandomnessUnavailable` if the generator fails or
/// `bound` is zero or does not fit in 32 bits.
pub fn uniform_index<R: RngCore + CryptoRng>(
    rng: &mut R,
    bound: usize,
) -> Result<usize, CryptoError> {
    let bound32 = u32::try_from(bound)
        .ok()
        .filter(|&b| b > 0)
        .ok_or_else(|| {
            CryptoError::RandomnessUnavailable(format!("invalid sampling bound: {bound}"))
        })?;

    // 2^32 mod bound: draws below this value would bias the low indices.
    let reject_below = u32::MAX.wrapping_rem(bound32).wrapping_add(1).wrapping_rem(bound32);

    loop {
        let draw = u32::from_le_bytes(random_array::<R, 4>(rng)?);
        if draw >= reject_below {
            let index = draw.wrapping_rem(bound32);
            return usize::try_from(index).map_err(|_| {
                CryptoError::RandomnessUnavailable("index exceeds platform width".into())
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
