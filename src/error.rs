// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type shared by the whole library.

use std::path::PathBuf;

/// Result alias using the library `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while splitting texture channels.
///
/// Each variant carries the path it concerns,
/// so that a message is always attributable to a file or directory.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The source folder does not exist or is not a directory.
    #[error("source folder does not exist: {}", .0.display())]
    MissingSource(PathBuf),

    /// Listing the source folder failed.
    #[error("cannot read folder {}: {source}", .path.display())]
    ReadDir {
        /// Folder being listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Creating an output folder failed.
    #[error("cannot create folder {}: {source}", .path.display())]
    CreateDir {
        /// Folder being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The source image could not be opened or decoded.
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        /// Image being decoded.
        path: PathBuf,
        /// Underlying decoder error.
        source: image::ImageError,
    },

    /// A channel plane could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// Output file.
        path: PathBuf,
        /// Underlying encoder error (I/O errors included).
        source: png::EncodingError,
    },
}
