// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

mod demos;

use std::process::ExitCode;

use demos::{Demo, DemoError};
use lantern_engine::{Engine, Settings};

fn main() -> ExitCode {
    lantern_engine::init_logging();

    match run(Settings::load_user_settings()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: Settings) -> Result<(), DemoError> {
    // First argument overrides the configured demo.
    let variant = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings.demo.variant.clone());
    let demo: Demo = variant.parse()?;
    log::info!("Starting {} demo", demo);

    let mut engine = Engine::new(settings)?;
    demo.run(&mut engine)
}
