use cartograph::{Error, MapRequest, render_map, write_response};
use clap::{Parser, ValueEnum};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// The bare SVG document
    Svg,
    /// A JSON response wrapping the document
    Json,
}

/// Renders a transit map request as SVG.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON map request
    input: PathBuf,

    /// Output file, standard output when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("cartograph=info"))
        .init();

    let args = Args::parse();

    log::info!("Loading map request from {}", args.input.display());
    let request = MapRequest::from_json(&fs::read_to_string(&args.input)?)?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    match args.format {
        Format::Svg => out.write_all(render_map(&request)?.as_bytes())?,
        Format::Json => write_response(&request, &mut out)?,
    }
    out.flush()?;

    if let Some(path) = &args.output {
        log::info!("Wrote map to {}", path.display());
    }
    Ok(())
}
