// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use crate::render::rect::Rect;

/// A region of a texture's pixels, used as the source of a draw.
///
/// Clips never own GPU resources; many clips can point into one shared
/// [`TextureHandle`](crate::TextureHandle).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct SpriteClip {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl SpriteClip {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

impl From<SpriteClip> for Rect {
    fn from(clip: SpriteClip) -> Self {
        clip.rect()
    }
}

/// Fixed set of clips laid out over one sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    clips: Vec<SpriteClip>,
}

impl SpriteSheet {
    pub fn new(clips: Vec<SpriteClip>) -> Self {
        Self { clips }
    }

    /// Splits a `width` x `height` sheet into four equal corners:
    /// top left, top right, bottom left, bottom right.
    pub fn quadrants(width: u32, height: u32) -> Self {
        let (w, h) = (width / 2, height / 2);
        Self::new(vec![
            SpriteClip::new(0, 0, w, h),
            SpriteClip::new(w as i32, 0, w, h),
            SpriteClip::new(0, h as i32, w, h),
            SpriteClip::new(w as i32, h as i32, w, h),
        ])
    }

    pub fn get(&self, index: usize) -> Option<SpriteClip> {
        self.clips.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SpriteClip> + '_ {
        self.clips.iter().copied()
    }
}
