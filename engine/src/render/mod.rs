// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

pub mod backend;
pub mod clip;
pub mod color;
pub mod decode;
pub mod frame;
pub mod glow_backend;
pub mod recording_backend;
pub mod rect;
pub mod texture;
pub mod texture_set;
pub mod viewport;

#[cfg(test)]
pub(crate) mod fixtures;
