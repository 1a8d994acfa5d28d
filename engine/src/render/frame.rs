// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use crate::render::backend::RenderBackend;
use crate::render::rect::Rect;

/// The frame currently being drawn. Presentation happens after the scene returns.
pub struct Frame<'a, B: RenderBackend> {
    backend: &'a B,
    viewport: Option<Rect>,
}

impl<'a, B: RenderBackend> Frame<'a, B> {
    /// Clears the whole target and starts a frame.
    pub fn begin(backend: &'a B, clear_color: [u8; 4]) -> Self {
        backend.set_viewport(None);
        backend.clear(clear_color);
        Self {
            backend,
            viewport: None,
        }
    }

    /// Size of the area draws currently map to.
    pub fn size(&self) -> (u32, u32) {
        match self.viewport {
            Some(rect) => (rect.w, rect.h),
            None => self.backend.target_size(),
        }
    }

    pub fn bounds(&self) -> Rect {
        let (w, h) = self.size();
        Rect::from_size(w, h)
    }

    /// Runs `draw` with output confined to `viewport`, then restores the previous one.
    pub fn with_viewport<R>(&mut self, viewport: Rect, draw: impl FnOnce(&mut Self) -> R) -> R {
        let previous = self.viewport.replace(viewport);
        self.backend.set_viewport(Some(viewport));
        let result = draw(self);
        self.viewport = previous;
        self.backend.set_viewport(previous);
        result
    }
}
