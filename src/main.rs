//! valuekit - Numeric coercion from the command line
//!
//! Coerces each argument, or each stdin line when no arguments are given,
//! and prints `input<TAB>to_number<TAB>to_finite`.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valuekit::{format_number, memoize_with_store, to_finite, to_number, Config, Memoized, Value};

/// Main entry point for the valuekit command.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the memoized coercion over the configured store
/// 4. Coerce every input and print one line per input
/// 5. Log cache statistics
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valuekit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: store={}, lru_capacity={}",
        config.store, config.lru_capacity
    );

    let coerce = build_coercion(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            write_coercion(&mut out, &coerce, &line)?;
        }
    } else {
        for arg in &args {
            write_coercion(&mut out, &coerce, arg)?;
        }
    }
    out.flush()?;

    let stats = coerce.stats();
    info!(
        stats = %serde_json::to_string(&stats)?,
        hit_rate = stats.hit_rate(),
        "Coercion cache summary"
    );
    Ok(())
}

/// Builds a memoized function mapping `(raw, parsed)` to `[number, finite]`.
///
/// The raw input text is the first argument and therefore the cache key.
fn build_coercion(config: &Config) -> anyhow::Result<Memoized> {
    let coerce = Value::function(|args| {
        let value = args.get(1).cloned().unwrap_or_default();
        Value::array([to_number(&value), to_finite(&value)])
    });
    let store = config.build_store()?;
    Ok(memoize_with_store(coerce, None, store)?)
}

/// Parses an input as JSON, falling back to the raw text as a string.
fn parse_input(raw: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => Value::from(json),
        Err(_) => {
            debug!("input is not JSON, coercing it as a string");
            Value::from(raw)
        }
    }
}

fn write_coercion(out: &mut impl Write, coerce: &Memoized, raw: &str) -> anyhow::Result<()> {
    let result = coerce.call(&[Value::from(raw), parse_input(raw)])?;
    let (number, finite) = match &result {
        Value::Array(pair) => (
            pair.first().and_then(Value::as_f64).unwrap_or(f64::NAN),
            pair.get(1).and_then(Value::as_f64).unwrap_or(0.0),
        ),
        _ => (f64::NAN, 0.0),
    };
    writeln!(
        out,
        "{}\t{}\t{}",
        raw,
        format_number(number),
        format_number(finite)
    )?;
    Ok(())
}
