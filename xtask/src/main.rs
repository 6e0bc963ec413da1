use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "dualgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark every directed storage strategy and compare them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// Storage strategies as spelled in `GraphConfig` JSON. The first is the
/// reference column in the report.
const STRATEGIES: &[&str] = &["dense_matrix", "sparse_list"];

const BENCH: &str = "graph_benchmark";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running storage benchmarks...");

    // Build first to avoid measuring build time
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for strategy in STRATEGIES {
        println!("\n>>> Benchmarking storage: {}", strategy);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0")
           .env("DUALGRAPH_BENCH_STORAGE", strategy);

        cmd.arg("bench").arg("--bench").arg(BENCH);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(strategy);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd.status().context(format!("Failed to run bench for {}", strategy))?;

        if !status.success() {
            eprintln!("Warning: Benchmark failed for {}", strategy);
        } else {
            println!("Finished {} in {:.2?}", strategy, start.elapsed());
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: HashMap<String, HashMap<String, f64>> = HashMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Storage Strategy Benchmark Report")?;

    // Sort workloads
    let mut workloads: Vec<_> = results.keys().collect();
    workloads.sort();

    // Header
    write!(file, "| Workload |")?;
    for strategy in STRATEGIES {
        write!(file, " {} (Ops/s) | vs {} |", strategy, STRATEGIES[0])?;
    }
    writeln!(file)?;

    // Separator
    write!(file, "|---|")?;
    for _ in STRATEGIES {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    // Rows
    for workload in workloads {
        write!(file, "| {} |", workload)?;

        let reference_ops = results.get(workload)
            .and_then(|m| m.get(STRATEGIES[0]))
            .copied()
            .unwrap_or(0.0);

        for strategy in STRATEGIES {
            if let Some(ops) = results.get(workload).and_then(|m| m.get(*strategy)) {
                let rel = if reference_ops > 0.0 { ops / reference_ops } else { 0.0 };

                let ops_str = if *ops > 1_000_000.0 {
                    format!("{:.2}M", ops / 1_000_000.0)
                } else if *ops > 1_000.0 {
                    format!("{:.2}K", ops / 1_000.0)
                } else {
                    format!("{:.0}", ops)
                };

                write!(file, " {} | **{:.2}x** |", ops_str, rel)?;
            } else {
                write!(file, " N/A | - |")?;
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// `<baseline>/estimates.json`, reduced to the mean.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// `<baseline>/benchmark.json`, reduced to the declared throughput.
#[derive(Deserialize)]
struct BenchmarkMeta {
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(f64),
    Bytes(f64),
    BytesDecimal(f64),
}

impl Throughput {
    fn per_iteration(&self) -> f64 {
        match self {
            Throughput::Elements(n) | Throughput::Bytes(n) | Throughput::BytesDecimal(n) => *n,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn collect_results(root: &Path, dir: &Path, results: &mut HashMap<String, HashMap<String, f64>>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: target/criterion/<benchmark id>/<baseline>/estimates.json, where the id is
        // `name`, `group/function` or `group/function/parameter`.
        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let (Some(baseline_name), Some(workload_name)) =
            (dir_name(baseline_dir), workload_label(root, workload_dir))
        else {
            continue;
        };
        // Skips criterion's `base`/`new`/`change` and `report` directories.
        if !STRATEGIES.contains(&baseline_name.as_str()) {
            continue;
        }

        let Some(estimates) = read_json::<Estimates>(&path) else { continue };
        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }
        let elements = read_json::<BenchmarkMeta>(&baseline_dir.join("benchmark.json"))
            .and_then(|meta| meta.throughput)
            .map_or(1.0, |t| t.per_iteration());

        let metric = elements * 1e9 / time_ns;
        results.entry(workload_name)
               .or_default()
               .insert(baseline_name, metric);
    }
}

fn dir_name(dir: &Path) -> Option<String> {
    dir.file_name()?.to_str().map(str::to_string)
}

/// The benchmark id: `dir` relative to the criterion root, `/`-joined.
fn workload_label(root: &Path, dir: &Path) -> Option<String> {
    let relative = dir.strip_prefix(root).ok()?;
    let parts: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    (!parts.is_empty()).then(|| parts.join("/"))
}
