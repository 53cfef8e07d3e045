use std::path::PathBuf;

use clap::Parser;
use wadsvg::{Config, MatchMode, Theme};

/// Convert a DOOM map to an SVG image
#[derive(Parser, Debug)]
#[command(name = "wadsvg", version)]
struct Args {
    /// WAD file
    #[arg(short = 'f', long = "file")]
    input: PathBuf,

    /// Map name (e.g. E1M1 or MAP01)
    #[arg(short, long, required_unless_present = "list")]
    map: Option<String>,

    /// Output file name; standard output when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List all maps and exit
    #[arg(short, long)]
    list: bool,

    /// Add diagnostic comments to the SVG
    #[arg(short, long)]
    verbose: bool,

    /// Draw things (monsters, items, player starts)
    #[arg(short = 't', long = "things")]
    things: bool,

    /// Map units to pixels
    #[arg(short, long, default_value_t = wadsvg::render::defaults::SCALE)]
    scale: f64,

    /// Border around the map, in pixels
    #[arg(short, long, default_value_t = wadsvg::render::defaults::PADDING)]
    padding: i32,

    /// Match the whole map name instead of a prefix
    #[arg(long)]
    exact: bool,

    /// Colour theme: dark or light
    #[arg(long, default_value = "dark")]
    theme: Theme,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            input_path: args.input,
            map_name: args.map,
            output_path: args.output,
            verbose: args.verbose,
            draw_things: args.things,
            scale: args.scale,
            padding: args.padding,
            list_only: args.list,
            match_mode: if args.exact {
                MatchMode::Exact
            } else {
                MatchMode::Prefix
            },
            theme: args.theme,
        }
    }
}

fn main() -> miette::Result<()> {
    // Logs go to stderr; stdout may carry the SVG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(Args::parse());
    wadsvg::run(&config)?;
    Ok(())
}
