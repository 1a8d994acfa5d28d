// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::path::Path;

use image::{ImageResult, RgbaImage};

use crate::render::color::ColorKey;

/// Decodes any format the `image` crate understands into tightly packed RGBA8.
pub fn decode(path: &Path) -> ImageResult<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Makes every pixel matching `key` fully transparent. Returns how many were keyed.
pub fn apply_color_key(image: &mut RgbaImage, key: ColorKey) -> usize {
    let mut keyed = 0;
    for pixel in image.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if key.matches([r, g, b]) {
            pixel.0[3] = 0;
            keyed += 1;
        }
    }
    keyed
}
