//! Corpus Benchmarking Tool
//!
//! Measures the scoring pipeline on a large text file (an essay corpus, a
//! scraped HTML dump) to get throughput numbers for production-like input.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalization**: markup stripping, ASCII filtering, lowercasing
//! 2. **Tokenization**: splitting normalized text into tokens
//! 3. **Score**: normalization + tokenization + all three estimators
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/corpus_bench /path/to/corpus.txt
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Score ===
//! --------------------------------
//! Mode        : Score
//! Elapsed     : 0.052 s
//! Throughput  : 0.018 GiB/s
//! Tokens      : 1_204_331
//! Tokens/sec  : 23_160_211
//! Result      : 84.2210
//! --------------------------------
//! ```
//!
//! HD-D dominates on texts with many distinct occurrence counts; run in
//! release mode.

use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use lexd_core::analyzer::{TextNormalizer, Tokenizer};
use lexd_core::Scorer;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let Some(path) = args.get(1) else {
        eprintln!("Usage: corpus_bench <path>");
        return ExitCode::FAILURE;
    };

    println!("Loading file...");
    let input = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("corpus_bench: {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    bench_normalize(&input);
    bench_tokenize(&input);
    bench_score(&input);

    ExitCode::SUCCESS
}

fn bench_normalize(input: &str) {
    let normalizer = TextNormalizer::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| normalizer.normalize_into(input, &mut out));
    let elapsed = measure(|| normalizer.normalize_into(input, &mut out));

    print_perf("Normalize", input.len(), elapsed, 0, None);
}

fn bench_tokenize(input: &str) {
    let normalized = TextNormalizer::new().normalize(input);
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(&normalized, |_t, _p| sink += 1);
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(&normalized, |_t, _p| local += 1);
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", normalized.len(), elapsed, tokens, None);
}

fn bench_score(input: &str) {
    let normalizer = TextNormalizer::new();
    let tokenizer = Tokenizer::new();
    let scorer = Scorer::default();
    let mut norm_buf = String::with_capacity(input.len());

    println!("=== Score ===");

    let mut run = || {
        normalizer.normalize_into(input, &mut norm_buf);
        let tokens = tokenizer.tokens(&norm_buf);
        let outcome = scorer.score(&tokens);
        (tokens.len() as u64, outcome)
    };

    warmup(|| {
        let (_, outcome) = run();
        std::hint::black_box(outcome.is_ok());
    });

    let mut last = None;
    let elapsed = measure(|| last = Some(run()));

    let (tokens, outcome) = match last {
        Some((n, outcome)) => (n, Some(outcome)),
        None => (0, None),
    };

    let result = outcome.map(|o| match o {
        Ok(d) => match d.value() {
            Some(v) => format!("{:.4}", v),
            None => d.to_string(),
        },
        Err(e) => e.to_string(),
    });

    print_perf("Score", input.len(), elapsed, tokens, result.as_deref());
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64, result: Option<&str>) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    if let Some(result) = result {
        println!("Result      : {}", result);
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
