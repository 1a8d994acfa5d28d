// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::time::{Duration, Instant};

/// Logs how long the enclosing scope took when dropped.
pub struct ScopeTimer {
    label: String,
    level: log::Level,
    started: Instant,
}

impl ScopeTimer {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_level(label, log::Level::Debug)
    }

    pub fn with_level(label: impl Into<String>, level: log::Level) -> Self {
        Self {
            label: label.into(),
            level,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        log::log!(self.level, "{} finished in {:.2?}", self.label, self.elapsed());
    }
}
