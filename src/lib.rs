// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Texture channels in Rust (tcrs).
//!
//! Split packed texture images (typically roughness / metallic / occlusion
//! maps tagged with `_rmo` in their file name) into one grayscale PNG
//! per channel.
//!
//! ```no_run
//! use texture_channels_rs as tcrs;
//! use tcrs::core::channel::{ChannelPolicy, InvertSet};
//! use tcrs::core::extract::{self, Config};
//!
//! let config = Config {
//!     source_dir: "textures".into(),
//!     dest_dir: "textures/split".into(),
//!     invert: InvertSet::from_letters("r".chars()),
//!     create_subfolders: true,
//!     policy: ChannelPolicy::Normalize,
//! };
//! let summary = extract::process(&config)?;
//! println!("{} processed, {} failed", summary.nb_processed(), summary.nb_failed());
//! # Ok::<(), tcrs::Error>(())
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod error;
pub mod misc;

pub use crate::error::{Error, Result};
