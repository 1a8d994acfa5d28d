// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use image::RgbaImage;

use crate::error::TextureError;
use crate::render::backend::{DrawCall, RenderBackend};
use crate::render::clip::SpriteClip;
use crate::render::color::{ColorKey, ColorModulation};
use crate::render::decode;
use crate::render::rect::Rect;

/// Owns one GPU-resident image and its pixel dimensions.
///
/// A handle is either loaded (GPU texture present, non-zero size) or unloaded
/// (nothing held, zero size). The texture is destroyed on [`release`], on the
/// next [`load`], or when the handle is dropped, whichever comes first.
///
/// The backend is shared through an `Rc` and owns the context it draws with,
/// so that context outlives every texture created from it. Handles never
/// cross threads.
///
/// [`release`]: TextureHandle::release
/// [`load`]: TextureHandle::load
pub struct TextureHandle<B: RenderBackend> {
    backend: Rc<B>,
    raw: Option<B::Texture>,
    width: u32,
    height: u32,
    color_mod: ColorModulation,
}

impl<B: RenderBackend> fmt::Debug for TextureHandle<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureHandle")
            .field("loaded", &self.is_loaded())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("color_mod", &self.color_mod)
            .finish()
    }
}

impl<B: RenderBackend> TextureHandle<B> {
    pub fn new(backend: Rc<B>) -> Self {
        Self {
            backend,
            raw: None,
            width: 0,
            height: 0,
            color_mod: ColorModulation::default(),
        }
    }

    /// Creates a handle and loads `path` into it.
    pub fn from_file(backend: Rc<B>, path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let mut texture = Self::new(backend);
        texture.load(path)?;
        Ok(texture)
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), TextureError> {
        self.load_keyed(path.as_ref(), None)
    }

    /// Like [`load`](Self::load), but pixels matching `key` become fully transparent.
    pub fn load_with_color_key(
        &mut self,
        path: impl AsRef<Path>,
        key: ColorKey,
    ) -> Result<(), TextureError> {
        self.load_keyed(path.as_ref(), Some(key))
    }

    fn load_keyed(&mut self, path: &Path, key: Option<ColorKey>) -> Result<(), TextureError> {
        self.release();

        let mut image = decode::decode(path).map_err(|source| {
            let err = TextureError::Decode {
                path: path.to_path_buf(),
                source,
            };
            log::error!("{}", err);
            err
        })?;

        if let Some(key) = key {
            let keyed = decode::apply_color_key(&mut image, key);
            log::debug!("Color key {:?} cleared {} pixels in {:?}", key, keyed, path);
        }

        self.upload(path, &image)
    }

    /// Uploads an already decoded buffer. `label` names it in diagnostics.
    pub fn load_from_image(
        &mut self,
        label: impl AsRef<Path>,
        image: &RgbaImage,
    ) -> Result<(), TextureError> {
        self.release();
        self.upload(label.as_ref(), image)
    }

    fn upload(&mut self, path: &Path, image: &RgbaImage) -> Result<(), TextureError> {
        let upload_failure = |reason: String| {
            let err = TextureError::Upload {
                path: path.to_path_buf(),
                reason,
            };
            log::error!("{}", err);
            err
        };

        if image.width() == 0 || image.height() == 0 {
            return Err(upload_failure("image has no pixels".to_string()));
        }

        let raw = self
            .backend
            .upload(&path.to_string_lossy(), image)
            .map_err(upload_failure)?;

        self.raw = Some(raw);
        self.width = image.width();
        self.height = image.height();
        log::info!("Loaded texture {:?} ({}x{})", path, self.width, self.height);
        Ok(())
    }

    /// Draws the texture with its top left corner at (x, y).
    ///
    /// With a clip only that region is drawn, at the clip's size. Unloaded
    /// handles draw nothing.
    pub fn render(&self, x: i32, y: i32, clip: Option<SpriteClip>) {
        let (src, dst) = match clip {
            Some(clip) => (clip.rect(), Rect::new(x, y, clip.w, clip.h)),
            None => (
                Rect::from_size(self.width, self.height),
                Rect::new(x, y, self.width, self.height),
            ),
        };
        self.submit(src, dst);
    }

    /// Draws the whole texture stretched over `dst`.
    pub fn render_stretched(&self, dst: Rect) {
        self.submit(Rect::from_size(self.width, self.height), dst);
    }

    fn submit(&self, src: Rect, dst: Rect) {
        let Some(raw) = &self.raw else {
            log::trace!("Skipping draw of unloaded texture at {:?}", dst);
            return;
        };
        self.backend.draw(
            raw,
            DrawCall {
                src,
                dst,
                color: self.color_mod,
            },
        );
    }

    /// Sets the multipliers used by every later draw. Kept across loads.
    pub fn set_color_modulation(&mut self, r: u8, g: u8, b: u8) {
        self.color_mod = ColorModulation::new(r, g, b);
    }

    pub fn color_modulation(&self) -> ColorModulation {
        self.color_mod
    }

    /// Destroys the GPU texture if one is held. Calling it again does nothing.
    pub fn release(&mut self) {
        if let Some(raw) = self.raw.take() {
            self.backend.destroy(raw);
        }
        self.width = 0;
        self.height = 0;
    }

    pub fn is_loaded(&self) -> bool {
        self.raw.is_some()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl<B: RenderBackend> Drop for TextureHandle<B> {
    fn drop(&mut self) {
        self.release();
    }
}
