// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use texture_channels_rs as tcrs;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use tcrs::core::channel::{ChannelPolicy, InvertSet};
use tcrs::core::extract::Config;

/// Split every `_rmo` texture of a folder into one grayscale png per channel.
///
/// Logging verbosity is controlled by the RUST_LOG environment variable
/// (default: info).
#[derive(Parser, Debug)]
#[command(name = "tcrs_split", version, about)]
struct Args {
    /// Folder containing the textures.
    source: PathBuf,

    /// Output folder [default: the source folder].
    destination: Option<PathBuf>,

    /// Channels to invert, as comma separated letters among r, g, b and a.
    #[arg(short, long, value_delimiter = ',')]
    invert: Vec<String>,

    /// Create one subfolder per texture.
    #[arg(short, long)]
    subfolders: bool,

    /// Only output the channels physically present in the image,
    /// instead of converting every image to RGBA first.
    #[arg(long)]
    physical: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(error) = run(Args::parse()) {
        eprintln!("{:?}", error);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = build_config(args);
    let summary = config.process().with_context(|| {
        format!(
            "Cannot process textures of {}",
            config.source_dir.display()
        )
    })?;

    info!(
        "Done: {} processed, {} failed",
        summary.nb_processed(),
        summary.nb_failed()
    );
    for outcome in summary.failures() {
        warn!("Failed: {}", outcome.source.display());
    }
    Ok(())
}

/// Turn command line arguments into the extraction configuration.
fn build_config(args: Args) -> Config {
    let Args {
        source,
        destination,
        invert,
        subfolders,
        physical,
    } = args;
    let invert: InvertSet = invert
        .iter()
        .flat_map(|letters| letters.trim().to_lowercase().chars().collect::<Vec<_>>())
        .collect();
    let policy = if physical {
        ChannelPolicy::Physical
    } else {
        ChannelPolicy::Normalize
    };
    let dest_dir = match destination {
        Some(dir) => dir,
        None => source.clone(),
    };
    Config {
        source_dir: source,
        dest_dir,
        invert,
        create_subfolders: subfolders,
        policy,
    }
}
