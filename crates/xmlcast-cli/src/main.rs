use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use xmlcast::{ConvertOptions, JsonConfig};

#[derive(Debug, Parser)]
#[command(name = "xmlcast", version, about = "Convert an XML document to JSON")]
struct Args {
    /// Input XML file
    #[arg(value_name = "INPUT", default_value = "tours.xml")]
    input: PathBuf,
    /// Output JSON file (defaults to the input path with a .json extension)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Spaces per indentation level in the output
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

fn main() -> Result<()> {
    // Silent by default; RUST_LOG=debug surfaces the library's tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("json"));

    let xml = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input.display()))?;

    let options = ConvertOptions {
        json: JsonConfig {
            indent: args.indent,
        },
        ..ConvertOptions::default()
    };
    let json = xmlcast::convert_with_options(&xml, &options)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    std::fs::write(&output, json)
        .with_context(|| format!("failed to write output file {}", output.display()))?;
    Ok(())
}
