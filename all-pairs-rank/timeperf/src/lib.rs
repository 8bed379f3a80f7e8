//! Input generators shared by the timing programs and the benchmarks.
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

const ALPHABET: &[u8] = b"abcdefghij";

/// Generates `num_texts` random texts of space-separated words, reproducible from `seed`.
///
/// The small alphabet makes trigrams recur across texts, as in natural language.
pub fn random_texts(num_texts: usize, num_words: usize, seed: u64) -> Vec<String> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..num_texts)
        .map(|_| {
            let words: Vec<String> = (0..num_words)
                .map(|_| {
                    let len = rng.gen_range(2..8);
                    (0..len)
                        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                        .collect()
                })
                .collect();
            words.join(" ")
        })
        .collect()
}
