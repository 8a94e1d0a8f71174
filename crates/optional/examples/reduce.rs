use anyhow::Result;
use optional::{collect, from_fns, if_present, none, some, OptionalInt, PrimitiveIterator};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a reading; unparsable input is missing.
fn reading(raw: &str) -> OptionalInt {
    raw.trim().parse::<i32>().ok().into()
}

fn main() -> Result<()> {
    // RUST_LOG=optional=trace shows the library's own events.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let readings: Vec<OptionalInt> = ["12", "x", "-4", "7", ""]
        .iter()
        // Negative readings are sensor faults.
        .map(|raw| reading(raw).filter(|v| v >= 0))
        .collect();

    let mut report = if_present(|v: i32| info!(value = v, "reading"))
        .or_else(|| info!("missing reading"));
    for r in &readings {
        report.apply(*r);
    }

    let stats = from_fns(
        || (0i64, 0usize),
        |acc: &mut (i64, usize), v: i64| {
            acc.0 += v;
            acc.1 += 1;
        },
        |(sum, n): (i64, usize)| if n == 0 { none() } else { some(sum as f64 / n as f64) },
    );
    for r in &readings {
        let mean = r.as_long().collect_with(&stats);
        info!(reading = %r, mean = %mean, "single-reading mean");
    }

    let total = readings.iter().map(|r| r.collect_with(&collect::summing())).sum::<i32>();
    info!(total, "sum of present readings");

    let mut it = some(total).iter();
    let first = it.try_next()?;
    let second = it.try_next();
    info!(first, exhausted = second.is_err(), "one-shot iterator");

    Ok(())
}
