use polybench::prelude::*;
use polybench::suite::{fibonacci, matrix, sorting, strings};
use tracing_subscriber::FmtSubscriber;

fn banner(title: &str) {
    let line = "=".repeat(60);
    println!("{line}");
    println!("{title}");
    println!("{line}");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter("polybench=info")
        .with_writer(std::io::stderr)
        .init();

    banner("Rust Performance Benchmarks");
    println!();

    println!("Running Sorting Benchmark...");
    sorting::run_benchmark();
    println!();

    println!("Running Fibonacci Benchmarks...");
    fibonacci::run_benchmark();
    println!();

    println!("Running Matrix Multiplication Benchmark...");
    matrix::run_benchmark();
    println!();

    println!("Running String Manipulation Benchmarks...");
    strings::run_benchmark()?;
    println!();

    println!("Running API Request Benchmark...");
    api_benchmark().await?;
    println!();

    banner("All benchmarks completed!");
    Ok(())
}
