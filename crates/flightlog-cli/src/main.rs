use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightlog_cli::output::{
    render_aircraft, render_airports, render_coordinates, render_route, OutputFormat,
};
use flightlog_cli::terminal::ColorPalette;
use flightlog_lib::{
    normalize_code, resolve_source, search_aircraft, AirportDirectory, CoordinateRecord,
    CoordinateTable, RoutePlot, SourceOptions,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight logbook airport utilities")]
struct Cli {
    /// Airport reference file (overrides FLIGHTLOG_AIRPORTS_PATH/URL).
    #[arg(long, global = true)]
    airports: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the airport directory by code, name, or city.
    Search {
        /// Typeahead text; omit to list the first entries.
        #[arg(default_value = "")]
        query: String,
    },
    /// Resolve an airport code to coordinates.
    Resolve {
        /// Airport code (case-insensitive).
        code: String,
    },
    /// Plot a route between two airport codes.
    Route {
        /// Departure airport code.
        #[arg(long = "from")]
        from: String,
        /// Arrival airport code.
        #[arg(long = "to")]
        to: String,
    },
    /// Search the aircraft type catalog.
    Aircraft {
        /// Name fragment; omit to list every type.
        #[arg(default_value = "")]
        query: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let palette = ColorPalette::detect();
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Search { query } => {
            handle_search(&mut out, cli.airports, &query, cli.format, palette)
        }
        Command::Resolve { code } => handle_resolve(&mut out, &code, cli.format, palette),
        Command::Route { from, to } => handle_route(&mut out, &from, &to, cli.format, palette),
        Command::Aircraft { query } => handle_aircraft(&mut out, &query, cli.format),
    }
}

fn handle_search<W: Write>(
    out: &mut W,
    airports: Option<PathBuf>,
    query: &str,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let mut options = SourceOptions::from_env();
    if let Some(path) = airports {
        options = options.with_path(path);
    }
    let source = resolve_source(&options).context("failed to select airport reference data")?;
    let directory = AirportDirectory::from_boxed(source);

    let results = directory.search(query);
    render_airports(out, query, &results, format, palette).context("failed to write output")?;
    Ok(())
}

fn handle_resolve<W: Write>(
    out: &mut W,
    code: &str,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let table = CoordinateTable::builtin();
    let coordinates = table.lookup(code)?;
    let record = CoordinateRecord {
        code: normalize_code(code),
        coordinates,
    };
    render_coordinates(out, &record, format, palette).context("failed to write output")?;
    Ok(())
}

fn handle_route<W: Write>(
    out: &mut W,
    from: &str,
    to: &str,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let table = CoordinateTable::builtin();
    let plot = RoutePlot::resolve(&table, from, to)?;
    render_route(out, &plot, format, palette).context("failed to write output")?;
    Ok(())
}

fn handle_aircraft<W: Write>(out: &mut W, query: &str, format: OutputFormat) -> Result<()> {
    let aircraft = search_aircraft(query);
    render_aircraft(out, query, &aircraft, format).context("failed to write output")?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
