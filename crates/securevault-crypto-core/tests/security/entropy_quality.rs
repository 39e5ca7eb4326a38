//! Coarse statistical checks on salts, nonces and generated passwords.

use std::collections::HashMap;

use rand::rngs::OsRng;
use securevault_crypto_core::envelope::EnvelopeMaterial;
use securevault_crypto_core::password::{generate, GeneratorPolicy};
use securevault_crypto_core::rng::uniform_index;

#[test]
fn salt_bits_are_roughly_balanced() {
    let mut ones = 0u32;
    let samples = 2_000u32;
    for _ in 0..samples {
        let material = EnvelopeMaterial::generate(&mut OsRng).unwrap();
        ones += material.salt.iter().map(|b| b.count_ones()).sum::<u32>();
    }
    let total = samples * 16 * 8;
    let ratio = f64::from(ones) / f64::from(total);
    assert!((0.48..0.52).contains(&ratio), "ones ratio {ratio}");
}

#[test]
fn nonces_are_not_all_zero() {
    for _ in 0..100 {
        let material = EnvelopeMaterial::generate(&mut OsRng).unwrap();
        assert_ne!(material.nonce, [0u8; 12]);
    }
}

#[test]
fn uniform_index_covers_small_bound_evenly() {
    // 26 does not divide 2^32, so a naive modulo would skew low indices.
    let bound = 26;
    let draws = 52_000;
    let mut counts = vec![0u32; bound];
    for _ in 0..draws {
        counts[uniform_index(&mut OsRng, bound).unwrap()] += 1;
    }
    let expected = f64::from(draws) / 26.0;
    for (index, &count) in counts.iter().enumerate() {
        let deviation = (f64::from(count) - expected).abs() / expected;
        assert!(deviation < 0.1, "index {index}: {count} vs {expected}");
    }
}

#[test]
fn generated_characters_spread_across_alphabet() {
    let policy = GeneratorPolicy {
        length: 64,
        use_uppercase: false,
        use_lowercase: true,
        use_numbers: false,
        use_symbols: false,
    };
    let mut seen: HashMap<char, u32> = HashMap::new();
    for _ in 0..200 {
        for c in generate(&policy).unwrap().chars() {
            *seen.entry(c).or_default() += 1;
        }
    }
    assert_eq!(seen.len(), 26, "some lowercase letters never appeared");
}
