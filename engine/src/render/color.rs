// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Per-channel multiplier applied at draw time. 255 is full intensity.
///
/// Channel arithmetic wraps like the underlying `u8`, so brightening a
/// saturated channel rolls over to dim.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ColorModulation {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for ColorModulation {
    fn default() -> Self {
        Self::WHITE
    }
}

impl ColorModulation {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }

    pub fn brighten(&mut self, channel: Channel, step: u8) {
        let value = self.channel_mut(channel);
        *value = value.wrapping_add(step);
    }

    pub fn darken(&mut self, channel: Channel, step: u8) {
        let value = self.channel_mut(channel);
        *value = value.wrapping_sub(step);
    }

    /// Normalized multipliers for shader uniforms.
    pub fn to_f32(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// A pixel color treated as fully transparent when a texture is loaded.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ColorKey {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorKey {
    pub const CYAN: Self = Self::new(0, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn matches(&self, rgb: [u8; 3]) -> bool {
        [self.r, self.g, self.b] == rgb
    }
}
