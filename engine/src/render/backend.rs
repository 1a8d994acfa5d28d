// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use image::RgbaImage;

use crate::render::color::ColorModulation;
use crate::render::rect::Rect;

/// One textured quad submitted to the active frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DrawCall {
    /// Source region in texture pixels.
    pub src: Rect,
    /// Destination in target pixels, relative to the active viewport.
    pub dst: Rect,
    pub color: ColorModulation,
}

/// GPU primitives a [`TextureHandle`](crate::TextureHandle) is built on.
///
/// Methods take `&self`; implementations are bound to a single-threaded
/// context and use interior mutability where they need it.
pub trait RenderBackend {
    /// Opaque GPU-resident image. Exclusively owned by whoever holds it.
    type Texture;

    fn upload(&self, label: &str, image: &RgbaImage) -> Result<Self::Texture, String>;
    fn draw(&self, texture: &Self::Texture, call: DrawCall);
    fn destroy(&self, texture: Self::Texture);

    /// Confines subsequent draws to `viewport`, mapping its top left to (0, 0).
    /// `None` restores the full target.
    fn set_viewport(&self, viewport: Option<Rect>);
    fn clear(&self, rgba: [u8; 4]);
    fn target_size(&self) -> (u32, u32);
}
