// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::path::PathBuf;

use thiserror::Error;

use crate::settings::SettingsError;

/// Failure modes of [`crate::TextureHandle::load`].
///
/// Both leave the handle unloaded. Whether a failed load is fatal is up to the caller.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("Unable to load image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unable to create texture from {path:?}: {reason}")]
    Upload { path: PathBuf, reason: String },
}

impl TextureError {
    pub fn path(&self) -> &PathBuf {
        match self {
            TextureError::Decode { path, .. } | TextureError::Upload { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("SDL could not initialize: {0}")]
    Sdl(String),

    #[error("Window could not be created: {0}")]
    Window(String),

    #[error("GL context could not be created: {0}")]
    GlContext(String),

    #[error("Shader error: {0}")]
    Shader(String),

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
