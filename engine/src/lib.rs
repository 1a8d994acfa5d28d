// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

//! Texture handles and a small SDL2/OpenGL frame loop for 2D demos.

pub mod context;
pub mod engine;
pub mod error;
pub mod input;
pub mod render;
pub mod settings;
pub mod utils;

pub use context::RenderContext;
pub use engine::{Engine, Scene};
pub use error::{EngineError, TextureError};
pub use input::{InputMessage, MouseButton};
pub use render::backend::{DrawCall, RenderBackend};
pub use render::clip::{SpriteClip, SpriteSheet};
pub use render::color::{Channel, ColorKey, ColorModulation};
pub use render::frame::Frame;
pub use render::glow_backend::GlowBackend;
pub use render::recording_backend::{BackendEvent, RecordingBackend};
pub use render::rect::Rect;
pub use render::texture::TextureHandle;
pub use render::texture_set::{LoadReport, TextureSet};
pub use render::viewport::ViewportLayout;
pub use settings::{LoadFailurePolicy, MediaSettings, Settings};
pub use utils::scope_timer::ScopeTimer;

pub use sdl2::keyboard::Keycode;

/// Installs the `env_logger` backend. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
