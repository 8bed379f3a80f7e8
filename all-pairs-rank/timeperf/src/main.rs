use std::time::Instant;

use all_pairs_rank::rank_pairs;
use shingle_similarity::{Metric, SimilarityService};
use timeperf::random_texts;

const TRIALS: usize = 3;
const SCALES: [usize; 4] = [10, 100, 500, 1_000];
const NUM_WORDS: usize = 20;
const SEED: u64 = 42;

fn main() {
    let max_texts = *SCALES.last().unwrap();
    let texts = random_texts(max_texts, NUM_WORDS, SEED);

    for &num_texts in &SCALES {
        let texts = &texts[..num_texts];
        for parallel in [false, true] {
            let service = SimilarityService::default().parallel(parallel);
            let mut num_results = 0;
            let elapsed_sec = measure(TRIALS, || {
                num_results = service.compare(texts).unwrap().qgram.len();
            });
            println!(
                "[method=compare,parallel={parallel},num_texts={num_texts},num_results={num_results}] {elapsed_sec} sec"
            );
        }

        let profiles = SimilarityService::default().profiles(texts).unwrap();
        for metric in Metric::ALL {
            let mut num_results = 0;
            let elapsed_sec = measure(TRIALS, || {
                num_results = rank_pairs(&profiles, |p1, p2| metric.score(p1, p2)).len();
            });
            println!(
                "[method=rank_pairs,metric={metric},num_texts={num_texts},num_results={num_results}] {elapsed_sec} sec"
            );
        }
    }
}

fn measure<F>(num_trials: usize, mut func: F) -> f64
where
    F: FnMut(),
{
    let start = Instant::now();
    for _ in 0..num_trials {
        func();
    }
    let duration = start.elapsed();
    duration.as_secs_f64() / num_trials as f64
}
