use std::io::Write;
use std::ops::Range;
use std::time::Duration;

use log::{debug, info};

use crate::error::BenchError;
use crate::fib::{call_count, fib};
use crate::timer::Stopwatch;

pub const INPUTS: Range<u64> = 0..30;

// Written on its own line between the results and the elapsed time
pub const TIME_MARKER: &str = "TIME";

#[derive(Debug)]
pub struct Report {
    pub values: Vec<u64>,
    pub elapsed: Duration,
    // Recursive calls made by the workload, derived after timing
    pub calls: u64,
}

/// Computes `fib(i)` for every `i` in [`INPUTS`], writing one result per line
/// to `out`, followed by [`TIME_MARKER`] and the elapsed seconds.
///
/// Writing the results is part of the timed region.
pub fn run<W: Write>(out: &mut W) -> Result<Report, BenchError> {
    run_with(out, fib)
}

// The timed region contains only `workload` and the result writes
fn run_with<W, F>(out: &mut W, workload: F) -> Result<Report, BenchError>
where W: Write, F: Fn(u64) -> u64 {
    let mut values = Vec::with_capacity(INPUTS.end as usize);

    let sw = Stopwatch::start();
    for i in INPUTS {
        let value = workload(i);
        writeln!(out, "{}", value)?;
        values.push(value);
    }
    let elapsed = sw.elapsed();

    writeln!(out, "{}", TIME_MARKER)?;
    writeln!(out, "{}", elapsed.as_secs_f64())?;
    out.flush()?;

    let mut calls = 0;
    for (i, value) in INPUTS.zip(&values) {
        let n = call_count(i);
        debug!("fib({}) = {} in {} calls", i, value, n);
        calls += n;
    }
    info!("{} inputs, {} calls, {:?}", values.len(), calls, elapsed);

    Ok(Report { values, elapsed, calls })
}
