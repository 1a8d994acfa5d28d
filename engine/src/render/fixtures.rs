// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// Writes a solid `width` x `height` PNG into `dir` and returns its path.
pub(crate) fn write_png(dir: &Path, name: &str, width: u32, height: u32, rgba: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba(rgba))
        .save(&path)
        .expect("Failed to write PNG fixture");
    path
}
