// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Selection of the files to process.

/// Substring marking a file name as a packed texture to split.
pub const MARKER: &str = "_rmo";

/// Supported image extensions, lowercase and with the leading dot.
pub const SUPPORTED_EXTENSIONS: [&str; 8] = [
    ".png", ".jpg", ".jpeg", ".tga", ".tif", ".tiff", ".bmp", ".exr",
];

/// A file name is eligible if, ignoring case,
/// it contains the marker and ends with a supported extension.
pub fn is_eligible(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    lower.contains(MARKER)
        && SUPPORTED_EXTENSIONS
            .iter()
            .any(|extension| lower.ends_with(extension))
}

#[cfg(test)]
mod tests {

    use super::*;
    use quickcheck_macros;

    #[test]
    fn eligible_names() {
        assert!(is_eligible("wall_rmo.png"));
        assert!(is_eligible("Metal_RMO.TGA"));
        assert!(is_eligible("rock_rmo_4k.exr"));
        assert!(is_eligible("x_Rmo.JpEg"));
        assert!(is_eligible("_rmo.tif"));
    }

    #[test]
    fn not_eligible_names() {
        assert!(!is_eligible("floor_diffuse.png"));
        assert!(!is_eligible("wall_rmo.psd"));
        assert!(!is_eligible("wall_rmo"));
        assert!(!is_eligible("wall_rmo.png.bak"));
        assert!(!is_eligible("wallrmo.png"));
    }

    // PROPERTY TESTS ################################################

    #[quickcheck_macros::quickcheck]
    fn no_marker_never_eligible(name: String) -> bool {
        let name = name.to_lowercase().replace(MARKER, "");
        // Removing the marker may create a new one, e.g. "_r_rmomo".
        name.contains(MARKER) || !is_eligible(&name)
    }

    #[quickcheck_macros::quickcheck]
    fn marker_and_extension_always_eligible(prefix: String, ext_id: usize) -> bool {
        let extension = SUPPORTED_EXTENSIONS[ext_id % SUPPORTED_EXTENSIONS.len()];
        is_eligible(&format!("{}_RMO{}", prefix, extension.to_uppercase()))
    }
}
