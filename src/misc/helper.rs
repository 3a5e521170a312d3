// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Miscellaneous helper functions that didn't fit elsewhere.

use image::{io::Reader, DynamicImage, GrayImage, ImageResult};
use std::{ffi::OsStr, fs::File, io::BufWriter, path::Path};

/// Read an image from a file.
///
/// The format is detected from the file content,
/// the extension is only used when the content is not recognized.
pub fn read_image<P: AsRef<Path>>(file_path: P) -> ImageResult<DynamicImage> {
    Reader::open(file_path)?.with_guessed_format()?.decode()
}

/// Write an 8 bits gray png image to a file, replacing any existing file.
///
/// The `png` encoder is used directly so that the output is always
/// a single channel, 8 bits per sample image whatever the source format was.
pub fn write_png_gray8<P: AsRef<Path>>(
    file_path: P,
    img: &GrayImage,
) -> Result<(), png::EncodingError> {
    let (width, height) = img.dimensions();
    let img_file = File::create(file_path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(img_file), width, height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(img.as_raw())?;
    writer.finish()
}

/// Base name of a file, i.e. its name without the last extension.
///
/// `wall_rmo.png` gives `wall_rmo`, and `a.b.tga` gives `a.b`.
/// Names do not need to be valid unicode.
pub fn base_name(file_path: &Path) -> &OsStr {
    file_path
        .file_stem()
        .unwrap_or_else(|| file_path.as_os_str())
}
