// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

pub mod color_modulation;
pub mod key_press;
pub mod sprite_clips;
pub mod viewports;

#[cfg(test)]
pub(crate) mod fixtures;

use std::fmt;
use std::str::FromStr;

use lantern_engine::{Engine, EngineError, TextureError};
use thiserror::Error;

use color_modulation::ColorModulationDemo;
use key_press::KeyPressDemo;
use sprite_clips::SpriteClipsDemo;
use viewports::ViewportsDemo;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Unknown demo {0:?}; expected one of key_press, color_modulation, sprite_clips, viewports")]
    UnknownDemo(String),

    #[error("Failed to load media: {0}")]
    Media(#[from] TextureError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Demo {
    KeyPress,
    ColorModulation,
    SpriteClips,
    Viewports,
}

impl Demo {
    pub fn name(&self) -> &'static str {
        match self {
            Demo::KeyPress => "key_press",
            Demo::ColorModulation => "color_modulation",
            Demo::SpriteClips => "sprite_clips",
            Demo::Viewports => "viewports",
        }
    }

    /// Loads the demo's media on the engine's backend and runs it until exit.
    pub fn run(self, engine: &mut Engine) -> Result<(), DemoError> {
        let backend = engine.backend();
        let media = engine.settings().media.clone();
        match self {
            Demo::KeyPress => engine.run(KeyPressDemo::load(backend, &media)?),
            Demo::ColorModulation => engine.run(ColorModulationDemo::load(backend, &media)?),
            Demo::SpriteClips => engine.run(SpriteClipsDemo::load(backend, &media)?),
            Demo::Viewports => engine.run(ViewportsDemo::load(backend, &media)?),
        }
        Ok(())
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "key_press" => Ok(Demo::KeyPress),
            "color_modulation" => Ok(Demo::ColorModulation),
            "sprite_clips" => Ok(Demo::SpriteClips),
            "viewports" => Ok(Demo::Viewports),
            _ => Err(DemoError::UnknownDemo(s.to_string())),
        }
    }
}
