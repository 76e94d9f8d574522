use std::time::Instant;

use ezdiff::constants::{DEFAULT_SEED, TRIALS_PER_SIZE};
use ezdiff::output::save_records_csv;
use ezdiff::simulation::{aggregate_statistics, run_experiment, save_statistics, ExperimentConfig};

fn parse_args() -> (usize, u64, Option<String>) {
    let args: Vec<String> = std::env::args().collect();
    let mut trials = TRIALS_PER_SIZE;
    let mut seed = DEFAULT_SEED;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--trials" => {
                i += 1;
                if i < args.len() {
                    trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("Usage: ezdiff-recover [--trials N] [--seed S] [--output DIR]");
                println!();
                println!("Options:");
                println!(
                    "  --trials N     Trials per sample size (default: {})",
                    TRIALS_PER_SIZE
                );
                println!("  --seed S       RNG seed (default: {})", DEFAULT_SEED);
                println!("  --output DIR   Write results.csv and statistics JSON to DIR");
                println!("                 (default: results.csv in the current directory,");
                println!("                 no statistics artifact)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: ezdiff-recover [--trials N] [--seed S] [--output DIR]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (trials, seed, output)
}

fn main() {
    let (trials, seed, output) = parse_args();

    // Configure rayon thread pool
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .unwrap();

    let config = ExperimentConfig {
        trials_per_size: trials,
        seed,
        ..ExperimentConfig::default()
    };

    println!(
        "EZ-diffusion simulate-and-recover ({} sizes x {} trials, seed {})",
        config.sample_sizes.len(),
        config.trials_per_size,
        config.seed
    );
    println!("  Sample sizes: {:?}", config.sample_sizes);
    println!();

    println!(
        "Running {} trials ({} threads)...",
        config.sample_sizes.len() * config.trials_per_size,
        num_threads
    );
    let result = run_experiment(&config);

    let total = result.trials_attempted;
    let per_trial_us = result.elapsed.as_secs_f64() * 1e6 / total as f64;
    let throughput = total as f64 / result.elapsed.as_secs_f64();

    println!(
        "  Elapsed:     {:.1} ms",
        result.elapsed.as_secs_f64() * 1000.0
    );
    println!("  Per trial:   {:.1} \u{00b5}s", per_trial_us);
    println!("  Throughput:  {:.0} trials/sec", throughput);
    println!();

    let t_save = Instant::now();
    let csv_path = match &output {
        Some(dir) => format!("{}/results.csv", dir),
        None => "results.csv".to_string(),
    };
    save_records_csv(&result.records, &csv_path);
    println!("  Results:     {} ({} rows)", csv_path, result.records.len());

    let stats = aggregate_statistics(&result.records, result.trials_attempted, result.skips, seed);
    if let Some(ref dir) = output {
        let json_path = format!("{}/recovery_statistics.json", dir);
        save_statistics(&stats, &json_path);
        let save_ms = t_save.elapsed().as_secs_f64() * 1000.0;
        println!("  Statistics:  {} ({:.1} ms write)", json_path, save_ms);
    }
    println!();

    println!("Recovery summary:");
    println!(
        "  {:>6}  {:>6}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "N", "trials", "bias_a", "bias_v", "bias_t", "rmse_a", "rmse_v", "rmse_t"
    );
    for group in &stats.groups {
        println!(
            "  {:>6}  {:>6}  {:>10.6}  {:>10.6}  {:>10.6}  {:>10.6}  {:>10.6}  {:>10.6}",
            group.n,
            group.trials,
            group.bias.mean.a,
            group.bias.mean.v,
            group.bias.mean.t,
            group.rmse.a,
            group.rmse.v,
            group.rmse.t
        );
    }

    let skipped = result.skips.total();
    if skipped > 0 {
        println!();
        println!("  Skipped trials: {} of {}", skipped, total);
        if result.skips.insufficient_sample > 0 {
            println!(
                "    insufficient sample:   {}",
                result.skips.insufficient_sample
            );
        }
        if result.skips.boundary_accuracy > 0 {
            println!(
                "    boundary accuracy:     {}",
                result.skips.boundary_accuracy
            );
        }
        if result.skips.non_positive_variance > 0 {
            println!(
                "    non-positive variance: {}",
                result.skips.non_positive_variance
            );
        }
        if result.skips.negative_radicand > 0 {
            println!(
                "    negative radicand:     {}",
                result.skips.negative_radicand
            );
        }
    }
}
