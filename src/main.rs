use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use fibrec::bench;

#[derive(Parser)]
#[command(
    name = "fibrec",
    version,
    about = "Time naive recursive Fibonacci for inputs 0 to 29.",
    long_about = "Print fib(n) for n in 0..30, then TIME and the elapsed seconds. \
                  Set RUST_LOG=debug for per-input call counts on stderr."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    bench::run(&mut out).context("failed to write benchmark output")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
