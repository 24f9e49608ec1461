use std::fs::File;

use anyhow::{Context, bail};
use clap::Parser;
use payroll_cli::{ContractForm, render_breakdown};
use payroll_core::models::{PrimeItem, SchemeCode};
use payroll_data::{find_prime_type, load_prime_catalog};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Gross-to-net payroll calculator for employment contracts.
///
/// Assembles one month's compensation from the flags below and prints the
/// full breakdown: gross salary, employee contributions per scheme,
/// taxable base, IR withheld and net salary.
#[derive(Debug, Parser)]
struct Cli {
    /// Monthly base salary.
    #[arg(long, default_value = "0")]
    base: Decimal,

    /// Ad-hoc prime line, `LABEL:AMOUNT[:IMPOSABLE[:COTISABLE]]`
    /// with `oui`/`non` flags (both default to `oui`). Repeatable.
    #[arg(long = "prime")]
    primes: Vec<String>,

    /// Prime type catalog CSV used by `--prime-type`.
    #[arg(long)]
    catalog: Option<String>,

    /// Prime pre-filled from the catalog, `ID:AMOUNT`. Repeatable,
    /// requires `--catalog`.
    #[arg(long = "prime-type")]
    prime_types: Vec<String>,

    /// Enable CNSS at the statutory employee rate (4.48%).
    #[arg(long)]
    cnss: bool,

    /// Override the CNSS employee rate, in percent.
    #[arg(long)]
    cnss_rate: Option<Decimal>,

    /// Enable AMO at the statutory employee rate (2.26%).
    #[arg(long)]
    amo: bool,

    /// Override the AMO employee rate, in percent.
    #[arg(long)]
    amo_rate: Option<Decimal>,

    /// Enable CMIR at the statutory employee rate (6.00%).
    #[arg(long)]
    cmir: bool,

    /// Override the CMIR employee rate, in percent.
    #[arg(long)]
    cmir_rate: Option<Decimal>,

    /// Enable RCAR at the statutory employee rate (20.00%).
    #[arg(long)]
    rcar: bool,

    /// Override the RCAR employee rate, in percent.
    #[arg(long)]
    rcar_rate: Option<Decimal>,

    /// Contract not subject to income tax withholding.
    #[arg(long)]
    no_ir: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── flag parsing ────────────────────────────────────────────────────────────

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "oui" | "true" | "1" => Ok(true),
        "non" | "false" | "0" => Ok(false),
        other => bail!("invalid flag '{other}' (expected oui/non)"),
    }
}

/// Parses `LABEL:AMOUNT[:IMPOSABLE[:COTISABLE]]`.
fn parse_prime_spec(spec: &str) -> anyhow::Result<PrimeItem> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() < 2 || parts.len() > 4 {
        bail!("invalid prime spec '{spec}' (expected LABEL:AMOUNT[:IMPOSABLE[:COTISABLE]])");
    }

    let amount: Decimal = parts[1]
        .parse()
        .with_context(|| format!("invalid prime amount '{}'", parts[1]))?;
    let taxable = parts.get(2).map_or(Ok(true), |p| parse_flag(p))?;
    let cotisable = parts.get(3).map_or(Ok(true), |p| parse_flag(p))?;

    Ok(PrimeItem::new(parts[0], amount, taxable, cotisable))
}

/// Parses `ID:AMOUNT`.
fn parse_prime_type_spec(spec: &str) -> anyhow::Result<(i32, Decimal)> {
    let Some((id, amount)) = spec.split_once(':') else {
        bail!("invalid prime type spec '{spec}' (expected ID:AMOUNT)");
    };

    let id: i32 = id
        .parse()
        .with_context(|| format!("invalid prime type id '{id}'"))?;
    let amount: Decimal = amount
        .parse()
        .with_context(|| format!("invalid prime amount '{amount}'"))?;

    Ok((id, amount))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut form = ContractForm::new();
    form.set_base_salary(cli.base);
    form.set_ir_applicable(!cli.no_ir);

    for spec in &cli.primes {
        form.add_prime(parse_prime_spec(spec)?);
    }

    if !cli.prime_types.is_empty() {
        let path = cli
            .catalog
            .as_deref()
            .context("--prime-type requires --catalog")?;
        let file =
            File::open(path).with_context(|| format!("cannot open catalog '{path}'"))?;
        let catalog = load_prime_catalog(file)
            .with_context(|| format!("cannot load catalog '{path}'"))?;
        debug!("loaded {} prime types from {path}", catalog.len());

        for spec in &cli.prime_types {
            let (id, amount) = parse_prime_type_spec(spec)?;
            let prime_type = find_prime_type(&catalog, id)
                .with_context(|| format!("prime type {id} not found in catalog"))?;
            form.add_prime(PrimeItem::from_type(prime_type, amount));
        }
    }

    let scheme_flags = [
        (SchemeCode::Cnss, cli.cnss, cli.cnss_rate),
        (SchemeCode::Amo, cli.amo, cli.amo_rate),
        (SchemeCode::Cmir, cli.cmir, cli.cmir_rate),
        (SchemeCode::Rcar, cli.rcar, cli.rcar_rate),
    ];
    for (code, enabled, rate) in scheme_flags {
        if enabled || rate.is_some() {
            form.set_scheme_enabled(code, true);
        }
        if let Some(rate) = rate {
            form.set_scheme_rate(code, rate);
        }
    }

    print!("{}", render_breakdown(form.result()));

    Ok(())
}
