use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use map_builder_core::{
    api::{self, SaveMapResponse},
    dimensions::DimensionContext,
    document::MapDocument,
    validate::validate,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a map document against the configured dimensions
    Check {
        /// Map document (JSON) to check
        map: PathBuf,
        #[command(flatten)]
        dims: DimensionArgs,
    },
    /// Validate a map document and write its YAML export
    Export {
        /// Map document (JSON) to export
        map: PathBuf,
        #[command(flatten)]
        dims: DimensionArgs,
        /// Directory to write the artifact into; prints to stdout when omitted
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Render a map document as an ASCII grid
    Preview {
        /// Map document (JSON) to render
        map: PathBuf,
        #[command(flatten)]
        dims: DimensionArgs,
    },
    /// Print the reference example document as JSON
    Example,
}

/// Dimensions arrive as raw strings so the same parse contract applies
/// here as on the setup form.
#[derive(Args, Debug)]
struct DimensionArgs {
    /// Grid width (defaults to 20 when omitted)
    #[arg(long)]
    width: Option<String>,
    /// Grid height (defaults to 20 when omitted)
    #[arg(long)]
    height: Option<String>,
}

impl DimensionArgs {
    fn into_context(self) -> Result<DimensionContext> {
        let mut ctx = DimensionContext::new();
        match (self.width, self.height) {
            (Some(width), Some(height)) => {
                ctx.set(&width, &height)?;
            }
            (None, None) => {}
            _ => bail!("--width and --height must be given together"),
        }
        Ok(ctx)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check { map, dims } => check(map, dims),
        Command::Export { map, dims, out } => export(map, dims, out),
        Command::Preview { map, dims } => preview(map, dims),
        Command::Example => example(),
    }
}

fn read_raw_document(path: &PathBuf) -> Result<serde_json::Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read map document {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))
}

fn check(map: PathBuf, dims: DimensionArgs) -> Result<()> {
    let ctx = dims.into_context()?;
    let doc = api::parse_document(read_raw_document(&map)?)?;

    let dims = ctx.get();
    let violations = validate(&doc, dims);
    if violations.is_empty() {
        println!("OK: {} fits a {}x{} map", map.display(), dims.width, dims.height);
        return Ok(());
    }
    for violation in &violations {
        eprintln!("{violation}");
    }
    bail!("{} problem(s) found", violations.len());
}

fn export(map: PathBuf, dims: DimensionArgs, out: Option<PathBuf>) -> Result<()> {
    let ctx = dims.into_context()?;
    let raw = read_raw_document(&map)?;

    match api::save_map(&ctx, raw) {
        SaveMapResponse::Success { yaml, filename } => match out {
            Some(dir) => {
                let path = dir.join(&filename);
                fs::write(&path, &yaml)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Wrote {}", path.display());
                Ok(())
            }
            None => {
                print!("{yaml}");
                Ok(())
            }
        },
        SaveMapResponse::Error { errors } => {
            for error in &errors {
                eprintln!("{error}");
            }
            bail!("{} problem(s) found", errors.len());
        }
    }
}

fn preview(map: PathBuf, dims: DimensionArgs) -> Result<()> {
    let ctx = dims.into_context()?;
    let doc = api::parse_document(read_raw_document(&map)?)?;
    let dims = ctx.get();

    print!("{}", render_grid(&doc, dims.width, dims.height));
    println!("@ agent  # obstacle  e endpoint  p pickup  d delivery");

    // Out-of-bounds cells cannot be drawn, so report them below the grid.
    for violation in validate(&doc, dims) {
        eprintln!("{violation}");
    }
    Ok(())
}

/// Draws the map as one character per cell, row by row. Later markers
/// overwrite earlier ones, so agents always show on top.
fn render_grid(doc: &MapDocument, width: usize, height: usize) -> String {
    let mut cells = vec![vec!['.'; width]; height];
    let layers = [
        (&doc.map.obstacles, '#'),
        (&doc.map.non_task_endpoints, 'e'),
        (&doc.map.pickup_locations, 'p'),
        (&doc.map.delivery_locations, 'd'),
    ];
    for (positions, marker) in layers {
        for pos in positions {
            if pos.x < width && pos.y < height {
                cells[pos.y][pos.x] = marker;
            }
        }
    }
    for agent in &doc.agents {
        let pos = agent.start;
        if pos.x < width && pos.y < height {
            cells[pos.y][pos.x] = '@';
        }
    }

    let mut grid = String::with_capacity(height * (width + 1));
    for row in cells {
        grid.extend(row);
        grid.push('\n');
    }
    grid
}

fn example() -> Result<()> {
    let doc = api::load_example();
    let json = serde_json::to_string_pretty(&doc)?;
    println!("{json}");
    Ok(())
}
