use anyhow::Result;
use clap::{Parser, Subcommand};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build, test and verification automation for bitprim", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Checks the feature matrix on the host and the no_std targets
    CheckAll,
    /// Runs the test suite once per feature set
    TestAll,
    /// Runs the Kani proofs (requires cargo-kani)
    Kani,
    /// Runs the iai-callgrind benchmarks (requires valgrind)
    Bench {
        /// Benchmark with the portable fls strategy compiled in
        #[arg(long)]
        portable: bool,
    },
}

/// Feature sets every check and test pass runs against.
///
/// Covers both fls strategies, each capability flag on its own, all of them
/// together, and the C exports with and without a host-supplied fls.
const FEATURE_SETS: &[&str] = &[
    "",
    "portable-fls",
    "host-fls",
    "host-flsl",
    "host-flsll",
    "host-fls,host-flsl,host-flsll",
    "ffi",
    "ffi,portable-fls",
    "ffi,host-fls,host-flsl,host-flsll",
];

/// Bare-metal and wasm targets the library must build for.
const NO_STD_TARGETS: &[&str] = &["armv7r-none-eabi", "wasm32-unknown-unknown"];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Commands::CheckAll => check_all(&sh)?,
        Commands::TestAll => test_all(&sh)?,
        Commands::Kani => run_kani(&sh)?,
        Commands::Bench { portable } => run_bench(&sh, portable)?,
    }

    Ok(())
}

fn feature_args(features: &str) -> Vec<String> {
    if features.is_empty() {
        Vec::new()
    } else {
        vec!["--features".to_string(), features.to_string()]
    }
}

fn label(features: &str) -> &str {
    if features.is_empty() {
        "default"
    } else {
        features
    }
}

fn check_all(sh: &Shell) -> Result<()> {
    // Assume running from project root
    for features in FEATURE_SETS {
        println!("--- Checking host [{}] ---", label(features));
        let args = feature_args(features);
        cmd!(sh, "cargo check -p bitprim --all-targets {args...}").run()?;
    }

    for target in NO_STD_TARGETS {
        println!("--- Checking {} ---", target);
        ensure_target(sh, target)?;
        cmd!(sh, "cargo check -p bitprim --lib --target {target}").run()?;
        cmd!(sh, "cargo check -p bitprim --lib --target {target} --features portable-fls").run()?;
    }

    println!(">> All targets checked successfully.");
    Ok(())
}

fn test_all(sh: &Shell) -> Result<()> {
    let mut failed = Vec::new();

    for features in FEATURE_SETS {
        println!("--- Testing [{}] ---", label(features));
        let args = feature_args(features);
        if cmd!(sh, "cargo test -p bitprim {args...}").run().is_err() {
            println!("!! Tests failed for [{}]", label(features));
            failed.push(label(features).to_string());
        }
    }

    if !failed.is_empty() {
        return Err(anyhow::anyhow!(
            "test failures in feature sets: {}",
            failed.join(" | ")
        ));
    }

    println!(">> All feature sets passed.");
    Ok(())
}

fn run_kani(sh: &Shell) -> Result<()> {
    if cmd!(sh, "cargo kani --version").read().is_err() {
        return Err(anyhow::anyhow!(
            "'cargo kani' not found. Install with: cargo install --locked kani-verifier && cargo kani setup"
        ));
    }

    println!(">> Running Kani proofs...");
    cmd!(sh, "cargo kani -p bitprim").run()?;
    Ok(())
}

fn run_bench(sh: &Shell, portable: bool) -> Result<()> {
    ensure_iai_runner(sh)?;

    if portable {
        println!(">> Benchmarking with portable fls strategy...");
        cmd!(sh, "cargo bench -p bitprim --features portable-fls").run()?;
    } else {
        println!(">> Benchmarking with leading_zeros fls strategy...");
        cmd!(sh, "cargo bench -p bitprim").run()?;
    }
    Ok(())
}

fn ensure_target(sh: &Shell, target: &str) -> Result<()> {
    let output = cmd!(sh, "rustup target list --installed").read()?;
    if !output.contains(target) {
        println!("!! Target '{}' not found. Installing via rustup...", target);
        cmd!(sh, "rustup target add {target}").run()?;
    }
    Ok(())
}

fn ensure_iai_runner(sh: &Shell) -> Result<()> {
    if cmd!(sh, "valgrind --version").read().is_err() {
        return Err(anyhow::anyhow!("'valgrind' not found; iai-callgrind needs it"));
    }
    if cmd!(sh, "iai-callgrind-runner --version").read().is_err() {
        println!("!! 'iai-callgrind-runner' is not installed. Installing via cargo...");
        cmd!(sh, "cargo install --version 0.14.0 iai-callgrind-runner").run()?;
    }
    Ok(())
}
