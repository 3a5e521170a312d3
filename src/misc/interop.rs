// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Interoperability conversions between the image and matrix types.

use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Pixel};
use nalgebra::DMatrix;

use crate::misc::type_aliases::Plane;

/// Convert a `Plane` into a `GrayImage`.
/// Inverse operation of `matrix_from_image`.
///
/// Performs a transposition to accomodate for the
/// column major matrix into the row major image.
#[allow(clippy::cast_possible_truncation)]
pub fn image_from_matrix(mat: &Plane) -> GrayImage {
    let (nb_rows, nb_cols) = mat.shape();
    let mut img_buf = GrayImage::new(nb_cols as u32, nb_rows as u32);
    for (x, y, pixel) in img_buf.enumerate_pixels_mut() {
        *pixel = Luma([mat[(y as usize, x as usize)]]);
    }
    img_buf
}

/// Convert a `GrayImage` into a `Plane`.
/// Inverse operation of `image_from_matrix`.
pub fn matrix_from_image(img: GrayImage) -> Plane {
    let (width, height) = img.dimensions();
    DMatrix::from_row_slice(height as usize, width as usize, &img.into_raw())
}

/// Split an interleaved 8 bits buffer into one plane per channel.
///
/// `raw` must hold exactly `width * height * nb_channels` values,
/// which is always the case for the raw buffer of an `ImageBuffer`.
pub fn planes_from_raw(raw: &[u8], width: u32, height: u32, nb_channels: usize) -> Vec<Plane> {
    debug_assert!(nb_channels > 0);
    debug_assert_eq!(raw.len(), width as usize * height as usize * nb_channels);
    (0..nb_channels)
        .map(|k| {
            let values: Vec<u8> = raw.iter().skip(k).step_by(nb_channels).copied().collect();
            DMatrix::from_row_slice(height as usize, width as usize, &values)
        })
        .collect()
}

/// Split an 8 bits image buffer into one plane per channel of its pixel type.
pub fn planes_from_buffer<P>(img: &ImageBuffer<P, Vec<u8>>) -> Vec<Plane>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = img.dimensions();
    planes_from_raw(img.as_raw(), width, height, usize::from(P::CHANNEL_COUNT))
}

/// Four planes (R, G, B, A) of the image converted to RGBA.
///
/// Gray is replicated into R, G and B, and a missing alpha is fully opaque.
pub fn rgba_planes(img: &DynamicImage) -> Vec<Plane> {
    planes_from_buffer(&img.to_rgba8())
}

/// Planes of the channels physically present in the image, in storage order.
///
/// The image is brought to 8 bits per channel but keeps its layout,
/// so a gray image gives 1 plane, gray + alpha 2, RGB 3 and RGBA 4.
pub fn physical_planes(img: &DynamicImage) -> Vec<Plane> {
    match img.color().channel_count() {
        1 => planes_from_buffer(&img.to_luma8()),
        2 => planes_from_buffer(&img.to_luma_alpha8()),
        3 => planes_from_buffer(&img.to_rgb8()),
        _ => planes_from_buffer(&img.to_rgba8()),
    }
}

// TESTS #############################################################
