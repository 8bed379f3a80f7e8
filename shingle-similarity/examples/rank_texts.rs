use shingle_similarity::{Metric, SimilarityService};

fn main() {
    let documents = vec![
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
        "We welcome you to Jimbocho, the town of books and curry.",
        "Welcome to the town of books and curry, Jimbocho!",
    ];

    // Compares documents with character trigrams under every metric,
    // running the metric passes in parallel.
    let report = SimilarityService::new(3)
        .unwrap()
        .parallel(true)
        .compare(documents.iter())
        .unwrap();

    // Each list is ascending by score; the last pair is the most similar one
    // except for the q-gram distance, where the first pair is.
    for metric in Metric::ALL {
        println!("{metric}:");
        for pair in report.ranked(metric) {
            println!("  {pair}");
        }
    }
    println!("Done in {} sec", report.elapsed().as_secs_f64());
}
