// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

/// Axis-aligned rectangle in pixel space, origin at the top left.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn from_size(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// Saturates at `i32::MAX` instead of overflowing.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(extent(self.w))
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(extent(self.h))
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

fn extent(length: u32) -> i32 {
    i32::try_from(length).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.bottom(), 60);
        assert!(!rect.is_empty());
        assert!(Rect::from_size(0, 5).is_empty());
    }

    #[test]
    fn test_edges_saturate_far_from_origin() {
        let rect = Rect::new(i32::MAX - 5, i32::MAX, 64, 64);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);

        let huge = Rect::new(-10, 0, u32::MAX, 1);
        assert_eq!(huge.right(), i32::MAX - 10);
    }
}
