// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::rc::Rc;

use lantern_engine::{
    Frame, InputMessage, MediaSettings, RenderBackend, Scene, TextureError, TextureHandle,
    ViewportLayout,
};

/// The same image in three viewports: two top quarters and the bottom half.
pub struct ViewportsDemo<B: RenderBackend> {
    texture: TextureHandle<B>,
}

impl<B: RenderBackend> ViewportsDemo<B> {
    pub fn load(backend: Rc<B>, media: &MediaSettings) -> Result<Self, TextureError> {
        let mut texture = TextureHandle::new(backend);
        media
            .on_load_failure
            .check(texture.load(media.path("viewport.png")))?;
        Ok(Self { texture })
    }
}

impl<B: RenderBackend> Scene<B> for ViewportsDemo<B> {
    fn handle_input(&mut self, _message: &InputMessage) {}

    fn draw(&self, frame: &mut Frame<'_, B>) {
        let (screen_w, screen_h) = frame.size();
        for viewport in ViewportLayout::split(screen_w, screen_h).rects() {
            frame.with_viewport(viewport, |frame| {
                self.texture.render_stretched(frame.bounds());
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::fixtures::{media, write_png};
    use lantern_engine::{BackendEvent, LoadFailurePolicy, RecordingBackend, Rect};
    use tempfile::tempdir;

    #[test]
    fn test_draws_once_per_viewport() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "viewport.png", 64, 48, [10, 10, 10, 255]);
        let backend = Rc::new(RecordingBackend::new(640, 480));
        let demo =
            ViewportsDemo::load(backend.clone(), &media(dir.path(), LoadFailurePolicy::Abort))
                .unwrap();

        let mut frame = Frame::begin(backend.as_ref(), [255; 4]);
        backend.clear_events();
        demo.draw(&mut frame);

        let summary: Vec<String> = backend
            .events()
            .into_iter()
            .map(|event| match event {
                BackendEvent::Viewport(Some(rect)) => {
                    format!("viewport {}x{}+{}+{}", rect.w, rect.h, rect.x, rect.y)
                }
                BackendEvent::Viewport(None) => "full".to_string(),
                BackendEvent::Draw { call, .. } => format!("draw {}x{}", call.dst.w, call.dst.h),
                other => format!("{:?}", other),
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                "viewport 320x240+0+0",
                "draw 320x240",
                "full",
                "viewport 320x240+320+0",
                "draw 320x240",
                "full",
                "viewport 640x240+0+240",
                "draw 640x240",
                "full",
            ]
        );
        assert!(backend.draws().iter().all(|(_, call)| call.src == Rect::new(0, 0, 64, 48)));
    }
}
