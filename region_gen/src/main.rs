//! CLI entry point for region_gen.
//! Usage: cargo run -p region_gen > data/turkey-cities-districts.ts

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use region_data::{DatasetSource, validate_dataset};
use region_gen::{DEFAULT_BATCH_SIZE, build_catalog, load_dataset, render_typescript, seed_rows};

#[derive(Parser)]
#[command(author, version, about = "Generate the static province/district catalog.")]
struct Cli {
    /// Defaults to `generate` with the embedded dataset.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the TypeScript catalog.
    Generate(GenerateArgs),
    /// Print flattened `cities`/`districts` seed rows as JSON.
    Rows(RowsArgs),
    /// Report dataset problems; exits non-zero when any are found.
    Lint(DataArgs),
    /// Print one generated region record as JSON.
    Show(ShowArgs),
}

#[derive(Args, Default)]
struct DataArgs {
    /// Dataset TOML to use instead of the embedded one.
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Args, Default)]
struct GenerateArgs {
    #[command(flatten)]
    data: DataArgs,
    /// Write the catalog to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct RowsArgs {
    #[command(flatten)]
    data: DataArgs,
    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// Region code, e.g. `06`.
    code: String,
    #[command(flatten)]
    data: DataArgs,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => run_generate(&args),
        Commands::Rows(args) => run_rows(&args),
        Commands::Lint(args) => run_lint(&args),
        Commands::Show(args) => run_show(&args),
    }
}

fn load(args: &DataArgs) -> Result<DatasetSource> {
    load_dataset(args.data.as_deref()).context("while loading dataset")
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let dataset = load(&args.data)?;
    for finding in validate_dataset(&dataset) {
        warn!("dataset: {finding}");
    }
    let catalog = build_catalog(&dataset);
    let payload = render_typescript(&catalog);
    if let Some(out) = &args.out {
        fs::write(out, &payload).with_context(|| format!("writing '{}'", out.display()))?;
        info!(
            "wrote {} regions and {} districts to {}",
            catalog.regions.len(),
            catalog.district_count(),
            out.display()
        );
    } else {
        println!("{payload}");
    }
    Ok(())
}

fn run_rows(args: &RowsArgs) -> Result<()> {
    let dataset = load(&args.data)?;
    let rows = seed_rows(&build_catalog(&dataset));
    info!(
        "{} city rows, {} district rows in {} batches",
        rows.cities.len(),
        rows.districts.len(),
        rows.district_batches(DEFAULT_BATCH_SIZE).len()
    );
    println!("{}", rows.to_json(args.pretty).context("serializing seed rows")?);
    Ok(())
}

fn run_lint(args: &DataArgs) -> Result<()> {
    let dataset = load(args)?;
    let findings = validate_dataset(&dataset);
    if findings.is_empty() {
        println!(
            "ok: {} regions, {} districts",
            dataset.regions.len(),
            dataset.district_count()
        );
        return Ok(());
    }
    for finding in &findings {
        println!("- {finding}");
    }
    bail!("dataset has {} problem(s)", findings.len());
}

fn run_show(args: &ShowArgs) -> Result<()> {
    let dataset = load(&args.data)?;
    let catalog = build_catalog(&dataset);
    let Some(region) = catalog.region(&args.code) else {
        bail!("no region with code '{}'", args.code);
    };
    println!(
        "{}",
        serde_json::to_string_pretty(region).context("serializing region")?
    );
    Ok(())
}
