mod config;
mod emit;
mod error;
mod wav;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, DEFAULT_MAX_SAMPLES};
use emit::{UNIT_BYTES, unit_count, write_header, write_source};
use wav::{block_align, read_frames};

#[derive(Parser, Debug)]
#[command(name = "wav2c")]
#[command(about = "Embed the samples of a WAV file in a C header and source file")]
struct Args {
    /// The WAV file to be read from
    filein: PathBuf,

    /// Name of the C header and source to be written to (fileout.h and fileout.c)
    fileout: String,

    /// The maximum number of samples to process
    #[arg(long = "max", value_name = "N", default_value_t = DEFAULT_MAX_SAMPLES)]
    max_samples: usize,
}

/// Result of a completed conversion.
#[derive(Debug)]
struct Conversion {
    header: PathBuf,
    source: PathBuf,
    frames: usize,
    bytes: usize,
    units: usize,
}

/// Read the input, then write `<base>.h` and `<base>.c`.
/// Nothing is written when the input cannot be read.
fn convert(config: &Config) -> error::Result<Conversion> {
    let raw = read_frames(&config.input, config.max_samples)?;
    let align = block_align(&raw.spec);
    if align != UNIT_BYTES {
        warn!(
            "{} has {} bytes per frame; output is still grouped in {}-byte units",
            config.input.display(),
            align,
            UNIT_BYTES
        );
    }

    let units = unit_count(&raw.bytes);
    let header = config.header_path();
    let source = config.source_path();
    write_header(&header, &config.base, units)?;
    write_source(&source, &config.base, &raw.bytes)?;

    Ok(Conversion {
        header,
        source,
        frames: raw.frames,
        bytes: raw.bytes.len(),
        units,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wav2c=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = Config {
        input: args.filein,
        base: args.fileout,
        max_samples: args.max_samples,
    };

    info!("Reading up to {} frames from {:?}", config.max_samples, config.input);
    match convert(&config) {
        Ok(done) => {
            info!(
                "Read {} frames ({} bytes), wrote {} units to {:?} and {:?}",
                done.frames, done.bytes, done.units, done.header, done.source
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
