// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Channels of a texture: fixed suffix mapping, inversion and splitting.

use image::DynamicImage;
use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};
use std::iter::FromIterator;

use crate::misc::interop;
use crate::misc::type_aliases::Plane;

/// One of the four channels a texture can be split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// Red, suffix `_r`, plane 0.
    Red,
    /// Green, suffix `_g`, plane 1.
    Green,
    /// Blue, suffix `_b`, plane 2.
    Blue,
    /// Alpha, suffix `_a`, plane 3.
    Alpha,
}

impl Channel {
    /// All channels, in output order.
    /// Position in this table is the plane index of the channel.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Index of the channel plane.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }

    /// Single letter identifying the channel in an invert set.
    pub fn letter(self) -> char {
        match self {
            Channel::Red => 'r',
            Channel::Green => 'g',
            Channel::Blue => 'b',
            Channel::Alpha => 'a',
        }
    }

    /// Suffix appended to the base name of output files.
    pub fn suffix(self) -> &'static str {
        match self {
            Channel::Red => "_r",
            Channel::Green => "_g",
            Channel::Blue => "_b",
            Channel::Alpha => "_a",
        }
    }

    /// Name of the output file for this channel, `<base_name>_<letter>.png`.
    pub fn output_file_name(self, base_name: &OsStr) -> OsString {
        let mut name = base_name.to_owned();
        name.push(self.suffix());
        name.push(".png");
        name
    }
}

/// Set of channel letters whose values get inverted.
///
/// Only membership matters. Letters that do not name a channel
/// are kept but never match, so they have no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertSet {
    letters: BTreeSet<char>,
}

impl InvertSet {
    /// Empty set, nothing is inverted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from channel letters, e.g. `InvertSet::from_letters("rg".chars())`.
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        InvertSet {
            letters: letters.into_iter().collect(),
        }
    }

    /// Check whether values of the given channel must be inverted.
    pub fn contains(&self, channel: Channel) -> bool {
        self.letters.contains(&channel.letter())
    }

    /// True if no letter was given.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromIterator<char> for InvertSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_letters(iter)
    }
}

/// How images with less than four channels are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelPolicy {
    /// Convert every image to RGBA first, so that four planes are always produced.
    /// Gray is replicated into R, G and B, and a missing alpha is fully opaque (255).
    Normalize,
    /// Only produce the planes physically present in the image,
    /// e.g. no alpha plane for an RGB image.
    ///
    /// Planes are mapped to channels by position, not by meaning:
    /// a gray + alpha image writes its gray plane to `_r`
    /// and its alpha plane to `_g`.
    Physical,
}

impl Default for ChannelPolicy {
    fn default() -> Self {
        ChannelPolicy::Normalize
    }
}

impl ChannelPolicy {
    /// Split an image into its planes, indexed like `Channel::ALL`.
    /// At most four planes are returned.
    pub fn split(self, img: &DynamicImage) -> Vec<Plane> {
        match self {
            ChannelPolicy::Normalize => interop::rgba_planes(img),
            ChannelPolicy::Physical => interop::physical_planes(img),
        }
    }
}

/// Replace each value `v` of the plane by `255 - v`.
pub fn invert(mut plane: Plane) -> Plane {
    plane.iter_mut().for_each(|v| *v = 255 - *v);
    plane
}

/// Invert the plane if its channel is part of the invert set, otherwise leave it as is.
pub fn apply_invert(channel: Channel, invert_set: &InvertSet, plane: Plane) -> Plane {
    if invert_set.contains(channel) {
        invert(plane)
    } else {
        plane
    }
}

// TESTS #############################################################
