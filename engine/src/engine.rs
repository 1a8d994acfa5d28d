// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::rc::Rc;
use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::context::RenderContext;
use crate::error::EngineError;
use crate::input::InputMessage;
use crate::render::backend::RenderBackend;
use crate::render::frame::Frame;
use crate::render::glow_backend::GlowBackend;
use crate::settings::Settings;

/// One demo program: reacts to input and draws itself each frame.
pub trait Scene<B: RenderBackend> {
    fn handle_input(&mut self, message: &InputMessage);
    fn draw(&self, frame: &mut Frame<'_, B>);
}

pub struct Engine {
    context: RenderContext,
    settings: Settings,
}

impl Engine {
    pub fn new(settings: Settings) -> Result<Self, EngineError> {
        let context = RenderContext::create(&settings.window, &settings.renderer)?;
        Ok(Self { context, settings })
    }

    pub fn backend(&self) -> Rc<GlowBackend> {
        self.context.backend().clone()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs until the window is closed.
    ///
    /// The scene is consumed so its textures are destroyed before the context.
    pub fn run<S: Scene<GlowBackend>>(&mut self, mut scene: S) {
        let fps = self.settings.window.target_fps.max(1);
        let target_frame = Duration::from_secs_f64(1.0 / fps as f64);
        let clear_color = self.settings.renderer.clear_color;

        'render: loop {
            let frame_start = Instant::now();

            for event in self.context.event_pump().poll_iter() {
                let Some(message) = InputMessage::from_event(&event) else {
                    continue;
                };
                if message.is_exit() {
                    break 'render;
                }
                scene.handle_input(&message);
            }

            {
                let backend = self.context.backend();
                let mut frame = Frame::begin(backend.as_ref(), clear_color);
                scene.draw(&mut frame);
            }
            self.context.present();

            let frame_time = frame_start.elapsed();
            log::trace!("Frame took {:.2?}", frame_time);
            if frame_time < target_frame {
                sleep(target_frame - frame_time);
            }
        }

        log::info!(
            "Leaving after {} frames",
            self.context.backend().frames_rendered()
        );
    }
}
