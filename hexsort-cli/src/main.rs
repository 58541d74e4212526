use anyhow::{Context, Result};
use clap::Parser;
use hexsort::{read_palette, write_palette, Mask};
use std::ffi::OsString;
use std::io::{self, BufWriter};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sort hex colors read on stdin by how dominant the masked hue is.
#[derive(Parser)]
#[command(name = "hexsort", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// RGB channel mask, 0-7 (4 = red, 6 = yellow, 7 = brightness)
    #[arg(allow_hyphen_values = true)]
    mask: Option<OsString>,

    /// Extra arguments are ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    ignored: Vec<OsString>,
}

fn usage() {
    let argv0 = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hexsort".to_string());
    eprintln!("usage: {} [mask]", argv0);
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexsort=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mask = match cli.mask.as_deref().map(|arg| arg.to_string_lossy()) {
        Some(arg) if arg.starts_with("-h") => {
            usage();
            return Ok(());
        }
        Some(arg) => Mask::parse(&arg),
        None => Mask::default(),
    };
    if !cli.ignored.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.ignored);
    }
    debug!("Scoring with mask {}", mask);

    let palette = read_palette(io::stdin().lock(), mask).context("Failed to read colors")?;

    let stdout = io::stdout();
    write_palette(BufWriter::new(stdout.lock()), &palette)
        .context("Failed to write colors")?;

    Ok(())
}
