// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::rc::Rc;

use lantern_engine::{
    Channel, ColorModulation, Frame, InputMessage, Keycode, MediaSettings, RenderBackend, Scene,
    TextureError, TextureHandle,
};

const STEP: u8 = 32;

/// Q/W/E raise red/green/blue, A/S/D lower them. Channels wrap around.
pub struct ColorModulationDemo<B: RenderBackend> {
    texture: TextureHandle<B>,
    modulation: ColorModulation,
}

impl<B: RenderBackend> ColorModulationDemo<B> {
    pub fn load(backend: Rc<B>, media: &MediaSettings) -> Result<Self, TextureError> {
        let mut texture = TextureHandle::new(backend);
        media
            .on_load_failure
            .check(texture.load(media.path("colors.png")))?;
        Ok(Self {
            texture,
            modulation: ColorModulation::default(),
        })
    }

    pub fn modulation(&self) -> ColorModulation {
        self.modulation
    }
}

impl<B: RenderBackend> Scene<B> for ColorModulationDemo<B> {
    fn handle_input(&mut self, message: &InputMessage) {
        let InputMessage::KeyDown { keycode } = *message else {
            return;
        };
        match keycode {
            Keycode::Q => self.modulation.brighten(Channel::Red, STEP),
            Keycode::W => self.modulation.brighten(Channel::Green, STEP),
            Keycode::E => self.modulation.brighten(Channel::Blue, STEP),
            Keycode::A => self.modulation.darken(Channel::Red, STEP),
            Keycode::S => self.modulation.darken(Channel::Green, STEP),
            Keycode::D => self.modulation.darken(Channel::Blue, STEP),
            _ => return,
        }
        let ColorModulation { r, g, b } = self.modulation;
        self.texture.set_color_modulation(r, g, b);
    }

    fn draw(&self, _frame: &mut Frame<'_, B>) {
        self.texture.render(0, 0, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::fixtures::{media, write_png};
    use lantern_engine::{LoadFailurePolicy, RecordingBackend};
    use tempfile::tempdir;

    fn press(demo: &mut ColorModulationDemo<RecordingBackend>, keycode: Keycode) {
        demo.handle_input(&InputMessage::KeyDown { keycode });
    }

    #[test]
    fn test_keys_step_channels_with_wraparound() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "colors.png", 16, 16, [255, 255, 255, 255]);
        let backend = Rc::new(RecordingBackend::default());
        let mut demo =
            ColorModulationDemo::load(backend.clone(), &media(dir.path(), LoadFailurePolicy::Abort))
                .unwrap();

        press(&mut demo, Keycode::Q);
        press(&mut demo, Keycode::S);
        press(&mut demo, Keycode::D);
        press(&mut demo, Keycode::D);
        press(&mut demo, Keycode::Z);

        assert_eq!(demo.modulation(), ColorModulation::new(31, 223, 191));

        demo.draw(&mut Frame::begin(backend.as_ref(), [255; 4]));
        let draws = backend.draws();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].1.color, ColorModulation::new(31, 223, 191));
    }

    #[test]
    fn test_missing_texture_with_continue_draws_nothing() {
        let dir = tempdir().unwrap();
        let backend = Rc::new(RecordingBackend::default());
        let mut demo = ColorModulationDemo::load(
            backend.clone(),
            &media(dir.path(), LoadFailurePolicy::Continue),
        )
        .unwrap();

        press(&mut demo, Keycode::E);
        demo.draw(&mut Frame::begin(backend.as_ref(), [255; 4]));

        assert!(backend.draws().is_empty());
    }
}
