use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rebarc_props::{BarProperties, BarTable, GradeProperties, GradeTable};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "rebarc")]
#[command(about = "Rebar properties and layout geometry")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Physical properties of a standard bar designator
    Props(PropsArgs),
    /// Yield strength and gamma_3 for a rebar grade
    Grade(GradeArgs),
    /// Distance from concrete face to bar center
    Position(PositionArgs),
    /// Center-to-center spacing for a bar count
    Spacing(SpacingArgs),
    /// Bar count for a target spacing (unrounded)
    Bars(BarsArgs),
    /// Steel area per foot, and total area when a width is given
    Area(AreaArgs),
}

#[derive(Args)]
struct PropsArgs {
    #[arg(long)]
    size: String,
    #[arg(long)]
    table: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GradeArgs {
    #[arg(long)]
    grade: String,
    #[arg(long)]
    grades: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PositionArgs {
    #[arg(long)]
    cover: f64,
    #[arg(long)]
    size: String,
    #[arg(long)]
    trans_size: Option<String>,
    #[arg(long)]
    table: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SpacingArgs {
    #[arg(long)]
    width: f64,
    #[arg(long)]
    bars: f64,
    #[arg(long, default_value_t = 0.0)]
    offset: f64,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BarsArgs {
    #[arg(long)]
    width: f64,
    #[arg(long)]
    spacing: f64,
    #[arg(long, default_value_t = 0.0)]
    offset: f64,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AreaArgs {
    #[arg(long)]
    size: String,
    #[arg(long)]
    spacing: f64,
    #[arg(long)]
    width: Option<f64>,
    #[arg(long, default_value_t = 0.0)]
    offset: f64,
    #[arg(long)]
    table: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Props(args) => props(args),
        Command::Grade(args) => grade(args),
        Command::Position(args) => position(args),
        Command::Spacing(args) => spacing(args),
        Command::Bars(args) => bars(args),
        Command::Area(args) => area(args),
    }
}

fn props(args: PropsArgs) -> Result<()> {
    let table = load_bar_table(args.table.as_deref())?;
    let props = BarProperties::resolve(&table, &args.size)
        .with_context(|| format!("failed to resolve bar size '{}'", args.size))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&props.labeled())?);
    } else {
        for (label, value) in props.labeled() {
            println!("{label}: {value:.3}");
        }
    }
    Ok(())
}

fn grade(args: GradeArgs) -> Result<()> {
    let table = load_grade_table(args.grades.as_deref())?;
    let props = GradeProperties::resolve(&table, &args.grade)
        .with_context(|| format!("failed to resolve grade '{}'", args.grade))?;

    if args.json {
        let out = json!({
            "yield_strength": props.yield_strength(),
            "gamma_3": props.gamma_3(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Yield Strength (ksi): {:.1}", props.yield_strength());
        println!("Gamma 3: {:.2}", props.gamma_3());
    }
    Ok(())
}

fn position(args: PositionArgs) -> Result<()> {
    let table = load_bar_table(args.table.as_deref())?;
    let bar = table
        .lookup(&args.size)
        .with_context(|| format!("failed to resolve bar size '{}'", args.size))?;
    let trans_diameter = match &args.trans_size {
        Some(size) => {
            table
                .lookup(size)
                .with_context(|| format!("failed to resolve transverse bar size '{size}'"))?
                .diameter
        }
        None => 0.0,
    };

    let value = rebarc_layout::position(args.cover, bar.diameter, trans_diameter);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&json!({ "position": value }))?);
    } else {
        println!("Position (in): {value:.3}");
    }
    Ok(())
}

fn spacing(args: SpacingArgs) -> Result<()> {
    let value = rebarc_layout::spacing(args.width, args.bars, args.offset)
        .context("spacing calculation failed")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&json!({ "spacing": value }))?);
    } else {
        println!("Spacing (in): {value:.3}");
    }
    Ok(())
}

fn bars(args: BarsArgs) -> Result<()> {
    let value = rebarc_layout::num_bars(args.width, args.spacing, args.offset)
        .context("bar count calculation failed")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&json!({ "num_bars": value }))?);
    } else {
        println!("Bars (unrounded): {value:.3}");
    }
    Ok(())
}

fn area(args: AreaArgs) -> Result<()> {
    let table = load_bar_table(args.table.as_deref())?;
    let bar = table
        .lookup(&args.size)
        .with_context(|| format!("failed to resolve bar size '{}'", args.size))?;

    let per_ft = rebarc_layout::as_per_ft(bar.area, args.spacing)
        .context("steel area calculation failed")?;
    let total = match args.width {
        Some(width) => Some(
            rebarc_layout::steel_area(bar.area, width, args.spacing, args.offset)
                .context("steel area calculation failed")?,
        ),
        None => None,
    };

    if args.json {
        let mut out = json!({ "as_per_ft": per_ft });
        if let Some(total) = total {
            out["steel_area"] = json!(total);
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("As per ft (in²/ft): {per_ft:.3}");
        if let Some(total) = total {
            println!("Steel Area (in²): {total:.3}");
        }
    }
    Ok(())
}

fn load_bar_table(path: Option<&Path>) -> Result<BarTable> {
    match path {
        Some(path) => {
            let table = BarTable::from_csv_path(path)
                .with_context(|| format!("failed to load bar table {}", path.display()))?;
            info!(path = %path.display(), rows = table.len(), "loaded bar table");
            Ok(table)
        }
        None => Ok(BarTable::standard()),
    }
}

fn load_grade_table(path: Option<&Path>) -> Result<GradeTable> {
    match path {
        Some(path) => {
            let table = GradeTable::from_csv_path(path)
                .with_context(|| format!("failed to load grade table {}", path.display()))?;
            info!(path = %path.display(), rows = table.len(), "loaded grade table");
            Ok(table)
        }
        None => Ok(GradeTable::standard()),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
