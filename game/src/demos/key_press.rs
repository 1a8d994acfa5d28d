// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::rc::Rc;

use lantern_engine::{
    Frame, InputMessage, Keycode, MediaSettings, RenderBackend, Scene, ScopeTimer, TextureError,
    TextureSet,
};

/// The image shown for each arrow key, plus a fallback.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyPressTexture {
    Default,
    Up,
    Down,
    Left,
    Right,
}

impl KeyPressTexture {
    pub const ALL: [KeyPressTexture; 5] = [
        KeyPressTexture::Default,
        KeyPressTexture::Up,
        KeyPressTexture::Down,
        KeyPressTexture::Left,
        KeyPressTexture::Right,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            KeyPressTexture::Default => "default.png",
            KeyPressTexture::Up => "up.png",
            KeyPressTexture::Down => "down.png",
            KeyPressTexture::Left => "left.png",
            KeyPressTexture::Right => "right.png",
        }
    }

    pub fn from_keycode(keycode: Keycode) -> Self {
        match keycode {
            Keycode::Up => KeyPressTexture::Up,
            Keycode::Down => KeyPressTexture::Down,
            Keycode::Left => KeyPressTexture::Left,
            Keycode::Right => KeyPressTexture::Right,
            _ => KeyPressTexture::Default,
        }
    }
}

/// Shows a different full-window image depending on the last key pressed.
pub struct KeyPressDemo<B: RenderBackend> {
    textures: TextureSet<KeyPressTexture, B>,
    current: KeyPressTexture,
}

impl<B: RenderBackend> KeyPressDemo<B> {
    pub fn load(backend: Rc<B>, media: &MediaSettings) -> Result<Self, TextureError> {
        let _timer = ScopeTimer::new("Loading key press media");
        let entries: Vec<_> = KeyPressTexture::ALL
            .iter()
            .map(|key| (*key, media.path(key.file_name())))
            .collect();

        let mut textures = TextureSet::new(backend);
        textures.load_all(&entries).enforce(media.on_load_failure)?;

        Ok(Self {
            textures,
            current: KeyPressTexture::Default,
        })
    }

    pub fn current(&self) -> KeyPressTexture {
        self.current
    }
}

impl<B: RenderBackend> Scene<B> for KeyPressDemo<B> {
    fn handle_input(&mut self, message: &InputMessage) {
        if let InputMessage::KeyDown { keycode } = *message {
            self.current = KeyPressTexture::from_keycode(keycode);
        }
    }

    fn draw(&self, frame: &mut Frame<'_, B>) {
        if let Some(texture) = self.textures.get(self.current) {
            texture.render_stretched(frame.bounds());
        }
    }
}
