// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use lantern_engine::{BackendEvent, LoadFailurePolicy, MediaSettings, RecordingBackend};

pub(crate) fn write_png(dir: &Path, name: &str, width: u32, height: u32, rgba: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba(rgba))
        .save(&path)
        .expect("Failed to write PNG fixture");
    path
}

pub(crate) fn media(root: &Path, on_load_failure: LoadFailurePolicy) -> MediaSettings {
    MediaSettings {
        root: root.to_path_buf(),
        on_load_failure,
    }
}

/// Texture id to the file name it was uploaded from.
pub(crate) fn uploaded_files(backend: &RecordingBackend) -> HashMap<u32, String> {
    backend
        .events()
        .into_iter()
        .filter_map(|event| match event {
            BackendEvent::Upload { id, label, .. } => {
                let name = Path::new(&label).file_name()?.to_string_lossy().into_owned();
                Some((id, name))
            }
            _ => None,
        })
        .collect()
}
