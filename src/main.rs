use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use brewlogo::convert_logo;

/// Resize a logo into the HomeBrewAssistant app-icon and splash-logo
/// asset catalogs (run from the repository root).
#[derive(Parser)]
#[command(name = "brewlogo", version)]
struct Cli {
    /// Source logo image (PNG or JPEG)
    logo_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // try_parse instead of parse: usage and errors go to stdout, argument
    // errors exit 1, --help and --version still exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        print!("{}", err.render());
        process::exit(if err.use_stderr() { 1 } else { 0 });
    });

    convert_logo(&cli.logo_file)
        .with_context(|| format!("converting {}", cli.logo_file.display()))?;
    Ok(())
}
