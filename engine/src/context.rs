// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::rc::Rc;

use glow::HasContext;

use crate::error::EngineError;
use crate::render::glow_backend::GlowBackend;
use crate::settings::{RendererSettings, WindowSettings};

/// SDL window with its GL context made current on it.
///
/// Owned by [`GlowBackend`], so the context lives as long as the last texture
/// that can still reach the backend.
pub struct GlSurface {
    _gl_context: sdl2::video::GLContext,
    window: sdl2::video::Window,
    _video: sdl2::VideoSubsystem,
    _sdl: sdl2::Sdl,
}

impl GlSurface {
    pub(crate) fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    pub(crate) fn swap(&self) {
        self.window.gl_swap_window();
    }
}

/// Backend and event pump. Created once at startup and passed to whoever needs it.
pub struct RenderContext {
    backend: Rc<GlowBackend>,
    event_pump: sdl2::EventPump,
}

impl RenderContext {
    pub fn create(
        window_settings: &WindowSettings,
        renderer_settings: &RendererSettings,
    ) -> Result<Self, EngineError> {
        let sdl = sdl2::init().map_err(|e| EngineError::Sdl(e.to_string()))?;
        let video = sdl.video().map_err(|e| EngineError::Sdl(e.to_string()))?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_context_flags().forward_compatible().set();

        let window = video
            .window(
                &window_settings.title,
                window_settings.width,
                window_settings.height,
            )
            .opengl()
            .position_centered()
            .build()
            .map_err(|e| EngineError::Window(e.to_string()))?;

        let gl_context = window
            .gl_create_context()
            .map_err(|e| EngineError::GlContext(e.to_string()))?;
        window
            .gl_make_current(&gl_context)
            .map_err(|e| EngineError::GlContext(e.to_string()))?;

        let interval = if renderer_settings.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video.gl_set_swap_interval(interval) {
            log::warn!("Could not set swap interval: {}", e);
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| video.gl_get_proc_address(s) as *const _)
        };
        unsafe {
            log::info!("OpenGL Version: {}", gl.get_parameter_string(glow::VERSION));
            log::info!(
                "GLSL Version: {}",
                gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION)
            );
        }

        let event_pump = sdl.event_pump().map_err(|e| EngineError::Sdl(e.to_string()))?;
        let surface = GlSurface {
            _gl_context: gl_context,
            window,
            _video: video,
            _sdl: sdl,
        };
        let backend = Rc::new(GlowBackend::new(Rc::new(gl), surface)?);

        Ok(Self {
            backend,
            event_pump,
        })
    }

    pub fn backend(&self) -> &Rc<GlowBackend> {
        &self.backend
    }

    pub(crate) fn event_pump(&mut self) -> &mut sdl2::EventPump {
        &mut self.event_pump
    }

    pub(crate) fn present(&self) {
        self.backend.present();
    }
}
