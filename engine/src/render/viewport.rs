// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use crate::render::rect::Rect;

/// Split-screen arrangement: two quarters across the top, one half below.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ViewportLayout {
    pub top_left: Rect,
    pub top_right: Rect,
    pub bottom: Rect,
}

impl ViewportLayout {
    pub fn split(screen_w: u32, screen_h: u32) -> Self {
        let (half_w, half_h) = (screen_w / 2, screen_h / 2);
        Self {
            top_left: Rect::new(0, 0, half_w, half_h),
            top_right: Rect::new(half_w as i32, 0, half_w, half_h),
            bottom: Rect::new(0, half_h as i32, screen_w, half_h),
        }
    }

    pub fn rects(&self) -> [Rect; 3] {
        [self.top_left, self.top_right, self.bottom]
    }
}
