// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other,
    Back,
    Forward,
}

impl From<sdl2::mouse::MouseButton> for MouseButton {
    fn from(button: sdl2::mouse::MouseButton) -> Self {
        match button {
            sdl2::mouse::MouseButton::Left => MouseButton::Left,
            sdl2::mouse::MouseButton::Middle => MouseButton::Middle,
            sdl2::mouse::MouseButton::Right => MouseButton::Right,
            sdl2::mouse::MouseButton::X1 => MouseButton::Back,
            sdl2::mouse::MouseButton::X2 => MouseButton::Forward,
            _ => MouseButton::Other,
        }
    }
}

/// Input the frame loop hands to the active scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputMessage {
    Quit,
    KeyDown { keycode: Keycode },
    KeyUp { keycode: Keycode },
    MouseMove { x: f32, y: f32 },
    MouseButtonDown { button: MouseButton },
    MouseButtonUp { button: MouseButton },
}

impl InputMessage {
    /// Translates an SDL event. Events scenes don't react to map to `None`.
    pub fn from_event(event: &Event) -> Option<Self> {
        match *event {
            Event::Quit { .. } => Some(InputMessage::Quit),
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => Some(InputMessage::KeyDown { keycode }),
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => Some(InputMessage::KeyUp { keycode }),
            Event::MouseMotion { x, y, .. } => Some(InputMessage::MouseMove {
                x: x as f32,
                y: y as f32,
            }),
            Event::MouseButtonDown { mouse_btn, .. } => Some(InputMessage::MouseButtonDown {
                button: MouseButton::from(mouse_btn),
            }),
            Event::MouseButtonUp { mouse_btn, .. } => Some(InputMessage::MouseButtonUp {
                button: MouseButton::from(mouse_btn),
            }),
            _ => None,
        }
    }

    /// Window close request. Every key, Escape included, goes to the scene.
    pub fn is_exit(&self) -> bool {
        matches!(self, InputMessage::Quit)
    }
}
