// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::rc::Rc;

use lantern_engine::{
    ColorKey, Frame, InputMessage, MediaSettings, RenderBackend, Scene, SpriteSheet, TextureError,
    TextureHandle,
};

/// Draws the four dots of one sprite sheet into the four window corners.
pub struct SpriteClipsDemo<B: RenderBackend> {
    sheet_texture: TextureHandle<B>,
    sheet: SpriteSheet,
}

impl<B: RenderBackend> SpriteClipsDemo<B> {
    pub fn load(backend: Rc<B>, media: &MediaSettings) -> Result<Self, TextureError> {
        let mut sheet_texture = TextureHandle::new(backend);
        media.on_load_failure.check(
            sheet_texture.load_with_color_key(media.path("dots.png"), ColorKey::CYAN),
        )?;
        let sheet = SpriteSheet::quadrants(sheet_texture.width(), sheet_texture.height());
        Ok(Self {
            sheet_texture,
            sheet,
        })
    }
}

impl<B: RenderBackend> Scene<B> for SpriteClipsDemo<B> {
    fn handle_input(&mut self, _message: &InputMessage) {}

    fn draw(&self, frame: &mut Frame<'_, B>) {
        let (screen_w, screen_h) = frame.size();
        for (index, clip) in self.sheet.iter().enumerate() {
            let x = if index % 2 == 0 { 0 } else { screen_w as i32 - clip.w as i32 };
            let y = if index < 2 { 0 } else { screen_h as i32 - clip.h as i32 };
            self.sheet_texture.render(x, y, Some(clip));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::fixtures::{media, write_png};
    use lantern_engine::{LoadFailurePolicy, RecordingBackend, Rect};
    use tempfile::tempdir;

    #[test]
    fn test_corners_get_their_quadrant() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "dots.png", 200, 200, [0, 255, 255, 255]);
        let backend = Rc::new(RecordingBackend::new(640, 480));
        let demo =
            SpriteClipsDemo::load(backend.clone(), &media(dir.path(), LoadFailurePolicy::Abort))
                .unwrap();

        demo.draw(&mut Frame::begin(backend.as_ref(), [255; 4]));

        let calls: Vec<_> = backend
            .draws()
            .into_iter()
            .map(|(_, call)| (call.src, call.dst))
            .collect();
        assert_eq!(
            calls,
            vec![
                (Rect::new(0, 0, 100, 100), Rect::new(0, 0, 100, 100)),
                (Rect::new(100, 0, 100, 100), Rect::new(540, 0, 100, 100)),
                (Rect::new(0, 100, 100, 100), Rect::new(0, 380, 100, 100)),
                (Rect::new(100, 100, 100, 100), Rect::new(540, 380, 100, 100)),
            ]
        );
    }

    #[test]
    fn test_missing_sheet_aborts() {
        let dir = tempdir().unwrap();
        let backend = Rc::new(RecordingBackend::default());
        let result =
            SpriteClipsDemo::load(backend, &media(dir.path(), LoadFailurePolicy::Abort));
        assert!(matches!(result, Err(TextureError::Decode { .. })));
    }
}
