use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use shingle_similarity::{Metric, SimilarityRequest, SimilarityService};

#[derive(Parser, Debug)]
#[clap(
    name = "shingle-similarity",
    about = "A program to rank all pairs of texts by shingle-based similarities."
)]
struct Args {
    /// File path to the texts to be compared, one per line.
    /// If None, texts are read from the standard input.
    #[clap(short = 'i', long = "input")]
    input_path: Option<PathBuf>,

    /// Reads the input as a JSON request of the form {"texts": [...]} instead of lines.
    #[clap(short = 'j', long)]
    json: bool,

    /// Window size for w-shingling in profile construction (must be more than 0).
    #[clap(short = 'w', long, default_value = "3")]
    window_size: usize,

    /// Weight of the shingles only in the left text for the Tversky index.
    #[clap(short = 'a', long, default_value = "1.0")]
    alpha: f64,

    /// Weight of the shingles only in the right text for the Tversky index.
    #[clap(short = 'b', long, default_value = "1.0")]
    beta: f64,

    /// Prints the ranked pairs of this metric only, one per line.
    /// "qgram", "cosine", "sorensenDice", "jaccard", "tversky" or "szymkiewiczSimpson".
    /// If None, the full report of all metrics is printed in JSON.
    #[clap(short = 'm', long)]
    metric: Option<Metric>,

    /// Disables parallel metric passes.
    #[clap(short = 'p', long)]
    disable_parallel: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let service = SimilarityService::new(args.window_size)?
        .tversky(args.alpha, args.beta)
        .parallel(!args.disable_parallel);

    let request = {
        let start = Instant::now();
        let rdr: Box<dyn Read> = match &args.input_path {
            Some(path) => Box::new(
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
            ),
            None => Box::new(io::stdin()),
        };
        let request = if args.json {
            serde_json::from_reader::<_, SimilarityRequest>(BufReader::new(rdr))
                .context("Failed to parse the request")?
        } else {
            SimilarityRequest::new(texts_iter(rdr)?)
        };
        info!("Loaded the input in {} sec", start.elapsed().as_secs_f64());
        request
    };

    let report = service.handle(request)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(metric) = args.metric {
        // Tversky weights come from the service configuration.
        for pair in report.ranked(metric) {
            writeln!(out, "{pair}")?;
        }
    } else {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    }

    Ok(())
}

fn texts_iter<R>(rdr: R) -> Result<Vec<String>>
where
    R: Read,
{
    let texts = BufReader::new(rdr).lines().collect::<io::Result<_>>()?;
    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texts_iter() {
        let texts = texts_iter("a b\n\nc\r\n".as_bytes()).unwrap();
        assert_eq!(texts, vec!["a b", "", "c"]);
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["shingle-similarity", "-m", "dice", "-w", "2"]).unwrap();
        assert_eq!(args.metric, Some(Metric::SorensenDice));
        assert_eq!(args.window_size, 2);
        assert_eq!((args.alpha, args.beta), (1., 1.));
        assert!(args.input_path.is_none());

        assert!(Args::try_parse_from(["shingle-similarity", "-m", "edit"]).is_err());

        let args = Args::try_parse_from(["shingle-similarity", "--input", "texts.txt"]).unwrap();
        assert_eq!(args.input_path, Some(PathBuf::from("texts.txt")));
        assert!(Args::try_parse_from(["shingle-similarity", "--input-path", "texts.txt"]).is_err());
    }
}
