// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Batch extraction of texture channels into grayscale images.
//!
//! The source folder is listed once, then every eligible file is decoded,
//! split into its channel planes, optionally inverted,
//! and each plane is written as an 8 bits gray png.
//! A failure only stops the file it happened in,
//! the outcome of every file is collected into a `Summary`.

use log::{debug, error, info};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::channel::{self, Channel, ChannelPolicy, InvertSet};
use crate::core::filter;
use crate::error::{Error, Result};
use crate::misc::{helper, interop};

/// Configuration of an extraction run.
/// Built once before processing, never modified during the run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder containing the textures. It must already exist.
    pub source_dir: PathBuf,
    /// Folder receiving the channel images. Created if missing.
    pub dest_dir: PathBuf,
    /// Channels whose values are inverted before writing.
    pub invert: InvertSet,
    /// Write the planes of each texture in a subfolder named after it.
    pub create_subfolders: bool,
    /// How images with less than four channels are split.
    pub policy: ChannelPolicy,
}

/// Result of processing one source file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Path of the source file.
    pub source: PathBuf,
    /// Paths of the written planes, or the error that stopped this file.
    pub result: Result<Vec<PathBuf>>,
}

impl FileOutcome {
    /// True if every plane of this file was written.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole run, in processing order.
#[derive(Debug, Default)]
pub struct Summary {
    /// One outcome per eligible source file.
    pub outcomes: Vec<FileOutcome>,
}

impl Summary {
    /// Number of source files fully processed.
    pub fn nb_processed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of source files that failed.
    pub fn nb_failed(&self) -> usize {
        self.outcomes.len() - self.nb_processed()
    }

    /// Iterator over the failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

impl Config {
    /// Run the extraction described by this configuration.
    pub fn process(&self) -> Result<Summary> {
        process(self)
    }

    /// Folder where the planes of the texture with the given base name go.
    /// Creates the per texture subfolder if needed.
    pub fn output_dir(&self, base_name: &OsStr) -> Result<PathBuf> {
        if self.create_subfolders {
            let dir = self.dest_dir.join(base_name);
            create_dir(&dir)?;
            Ok(dir)
        } else {
            Ok(self.dest_dir.clone())
        }
    }
} // impl Config

/// Process every eligible file of the source folder.
///
/// Only startup problems are returned as errors:
/// a missing source folder, an unreadable source folder,
/// or a destination folder that cannot be created.
/// Per file failures are logged and recorded in the returned `Summary`.
pub fn process(config: &Config) -> Result<Summary> {
    if !config.source_dir.is_dir() {
        return Err(Error::MissingSource(config.source_dir.clone()));
    }
    create_dir(&config.dest_dir)?;
    debug!("Destination folder: {}", config.dest_dir.display());

    // Snapshot of the folder content, taken once.
    let files = eligible_files(&config.source_dir)?;
    debug!("{} eligible files in {}", files.len(), config.source_dir.display());

    let outcomes = files
        .into_iter()
        .map(|path| {
            let result = extract_file(config, &path);
            let name = display_name(&path);
            match &result {
                Ok(_) => info!("Processed: {}", name),
                Err(err) => error!("Error processing {}: {}", name, err),
            }
            FileOutcome {
                source: path,
                result,
            }
        })
        .collect();
    Ok(Summary { outcomes })
}

/// Eligible files directly inside a folder, sorted by path.
///
/// Sub folders are never entered, even if their name is eligible.
/// Names that are not valid unicode are checked on their lossy conversion.
pub fn eligible_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let read_dir_err = |source| Error::ReadDir {
        path: dir.to_owned(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let eligible = filter::is_eligible(&entry.file_name().to_string_lossy());
        let path = entry.path();
        if eligible && !path.is_dir() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Split one texture file and write its planes.
/// Returns the paths of the written planes, in channel order.
///
/// Planes written before an error stay on disk.
pub fn extract_file(config: &Config, path: &Path) -> Result<Vec<PathBuf>> {
    let img = helper::read_image(path).map_err(|source| Error::Decode {
        path: path.to_owned(),
        source,
    })?;
    let planes = config.policy.split(&img);

    let base_name = helper::base_name(path);
    let out_dir = config.output_dir(base_name)?;

    // Zipping skips the channels missing from the planes.
    let mut written = Vec::with_capacity(planes.len());
    for (&chan, plane) in Channel::ALL.iter().zip(planes) {
        let plane = channel::apply_invert(chan, &config.invert, plane);
        let out_path = out_dir.join(chan.output_file_name(base_name));
        helper::write_png_gray8(&out_path, &interop::image_from_matrix(&plane)).map_err(
            |source| Error::Write {
                path: out_path.clone(),
                source,
            },
        )?;
        info!("Saved: {}", out_path.display());
        written.push(out_path);
    }
    Ok(written)
}

// HELPERS #####################################################################

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_owned(),
        source,
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
        .into_owned()
}
