// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::cell::Cell;
use std::rc::Rc;

use glam::Mat4;
use glow::{Context as GlowContext, HasContext};
use image::RgbaImage;

use crate::context::GlSurface;
use crate::error::EngineError;
use crate::render::backend::{DrawCall, RenderBackend};
use crate::render::rect::Rect;

const SPRITE_VERT: &str = include_str!("../../resources/shaders/sprite.vert");
const SPRITE_FRAG: &str = include_str!("../../resources/shaders/sprite.frag");

// position.xy, uv.xy
const FLOATS_PER_VERTEX: i32 = 4;

// A lost context keeps reporting errors; stop draining after this many.
const MAX_PENDING_ERRORS: usize = 16;

#[derive(Debug)]
pub struct GlowTexture {
    raw: glow::Texture,
    width: u32,
    height: u32,
}

struct SpriteShader {
    program: glow::Program,
    u_projection: Option<glow::UniformLocation>,
    u_color_mod: Option<glow::UniformLocation>,
    u_texture: Option<glow::UniformLocation>,
}

/// OpenGL 3.3 core backend. Draws every sprite as a textured quad.
///
/// The window and GL context are dropped last, after the backend's own GL
/// objects, and only once no texture handle holds the backend any more.
pub struct GlowBackend {
    gl: Rc<GlowContext>,
    shader: SpriteShader,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    target_size: Cell<(u32, u32)>,
    viewport: Cell<Option<Rect>>,
    frames_rendered: Cell<u64>,
    surface: GlSurface,
}

impl std::fmt::Debug for GlowBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlowBackend")
            .field("target_size", &self.target_size.get())
            .field("viewport", &self.viewport.get())
            .finish_non_exhaustive()
    }
}

impl GlowBackend {
    pub fn new(gl: Rc<GlowContext>, surface: GlSurface) -> Result<Self, EngineError> {
        let (width, height) = surface.drawable_size();
        unsafe {
            let shader = Self::compile_sprite_shader(&gl)?;

            let vao = gl.create_vertex_array().map_err(EngineError::Shader)?;
            let vbo = gl.create_buffer().map_err(EngineError::Shader)?;
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_size(
                glow::ARRAY_BUFFER,
                4 * FLOATS_PER_VERTEX * size_of::<f32>() as i32,
                glow::DYNAMIC_DRAW,
            );

            let stride = FLOATS_PER_VERTEX * size_of::<f32>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            let uv_offset = 2 * size_of::<f32>() as i32;
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, stride, uv_offset);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            // Color-keyed pixels carry alpha 0.
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

            let backend = Self {
                gl,
                shader,
                vao,
                vbo,
                target_size: Cell::new((width, height)),
                viewport: Cell::new(None),
                frames_rendered: Cell::new(0),
                surface,
            };
            backend.apply_viewport();
            Ok(backend)
        }
    }

    unsafe fn compile_sprite_shader(gl: &GlowContext) -> Result<SpriteShader, EngineError> {
        unsafe {
            let mut stages = Vec::with_capacity(2);
            for (kind, source, name) in [
                (glow::VERTEX_SHADER, SPRITE_VERT, "Vertex"),
                (glow::FRAGMENT_SHADER, SPRITE_FRAG, "Fragment"),
            ] {
                let stage = gl.create_shader(kind).map_err(EngineError::Shader)?;
                gl.shader_source(stage, source);
                gl.compile_shader(stage);
                if !gl.get_shader_compile_status(stage) {
                    let log = gl.get_shader_info_log(stage);
                    gl.delete_shader(stage);
                    return Err(EngineError::Shader(format!(
                        "{} shader compilation failed: {}",
                        name, log
                    )));
                }
                stages.push(stage);
            }

            let program = gl.create_program().map_err(EngineError::Shader)?;
            for stage in &stages {
                gl.attach_shader(program, *stage);
            }
            gl.link_program(program);
            let linked = gl.get_program_link_status(program);
            for stage in stages {
                gl.detach_shader(program, stage);
                gl.delete_shader(stage);
            }
            if !linked {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(EngineError::Shader(format!("Program linking failed: {}", log)));
            }

            Ok(SpriteShader {
                program,
                u_projection: gl.get_uniform_location(program, "u_projection"),
                u_color_mod: gl.get_uniform_location(program, "u_color_mod"),
                u_texture: gl.get_uniform_location(program, "u_texture"),
            })
        }
    }

    /// Follows the drawable size, then swaps the finished frame to the window.
    pub(crate) fn present(&self) {
        let size = self.surface.drawable_size();
        if self.target_size.get() != size {
            self.target_size.set(size);
            self.apply_viewport();
        }
        self.frames_rendered.set(self.frames_rendered.get() + 1);
        self.surface.swap();
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered.get()
    }

    /// Drains the GL error flags, oldest first.
    fn take_errors(&self) -> Vec<u32> {
        std::iter::from_fn(|| {
            let error = unsafe { self.gl.get_error() };
            (error != glow::NO_ERROR).then_some(error)
        })
        .take(MAX_PENDING_ERRORS)
        .collect()
    }

    fn apply_viewport(&self) {
        let (target_w, target_h) = self.target_size.get();
        let area = self
            .viewport
            .get()
            .unwrap_or_else(|| Rect::from_size(target_w, target_h));

        // GL viewports are anchored bottom left.
        let gl_y = target_h as i32 - area.bottom();
        let projection =
            Mat4::orthographic_rh_gl(0.0, area.w as f32, area.h as f32, 0.0, -1.0, 1.0);

        unsafe {
            self.gl.viewport(area.x, gl_y, area.w as i32, area.h as i32);
            self.gl.use_program(Some(self.shader.program));
            self.gl.uniform_matrix_4_f32_slice(
                self.shader.u_projection.as_ref(),
                false,
                &projection.to_cols_array(),
            );
        }
    }

    fn quad(texture: &GlowTexture, call: &DrawCall) -> [f32; 16] {
        let (tw, th) = (texture.width as f32, texture.height as f32);
        let (x0, y0) = (call.dst.x as f32, call.dst.y as f32);
        let (x1, y1) = (call.dst.right() as f32, call.dst.bottom() as f32);
        let (u0, v0) = (call.src.x as f32 / tw, call.src.y as f32 / th);
        let (u1, v1) = (call.src.right() as f32 / tw, call.src.bottom() as f32 / th);

        #[rustfmt::skip]
        let vertices = [
            x0, y0, u0, v0,
            x0, y1, u0, v1,
            x1, y0, u1, v0,
            x1, y1, u1, v1,
        ];
        vertices
    }
}

impl RenderBackend for GlowBackend {
    type Texture = GlowTexture;

    fn upload(&self, label: &str, image: &RgbaImage) -> Result<Self::Texture, String> {
        let stale = self.take_errors();
        if !stale.is_empty() {
            log::debug!("Discarding GL errors {:04X?} raised before uploading {}", stale, label);
        }

        let gl = &self.gl;
        unsafe {
            let raw = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(raw));
            for (param, value) in [
                (glow::TEXTURE_MIN_FILTER, glow::NEAREST),
                (glow::TEXTURE_MAG_FILTER, glow::NEAREST),
                (glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE),
                (glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE),
            ] {
                gl.tex_parameter_i32(glow::TEXTURE_2D, param, value as i32);
            }
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                image.width() as i32,
                image.height() as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(image.as_raw())),
            );
            gl.bind_texture(glow::TEXTURE_2D, None);

            if let Some(&error) = self.take_errors().first() {
                gl.delete_texture(raw);
                return Err(format!("GL error 0x{:04X} while uploading {}", error, label));
            }

            log::trace!("Uploaded {} ({}x{})", label, image.width(), image.height());
            Ok(GlowTexture {
                raw,
                width: image.width(),
                height: image.height(),
            })
        }
    }

    fn draw(&self, texture: &Self::Texture, call: DrawCall) {
        let vertices = Self::quad(texture, &call);
        let gl = &self.gl;
        unsafe {
            gl.use_program(Some(self.shader.program));
            let [r, g, b] = call.color.to_f32();
            gl.uniform_3_f32(self.shader.u_color_mod.as_ref(), r, g, b);
            gl.uniform_1_i32(self.shader.u_texture.as_ref(), 0);

            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(texture.raw));

            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            let bytes = bytemuck::cast_slice::<f32, u8>(&vertices);
            gl.buffer_sub_data_u8_slice(glow::ARRAY_BUFFER, 0, bytes);
            gl.draw_arrays(glow::TRIANGLE_STRIP, 0, 4);

            gl.bind_vertex_array(None);
            gl.bind_texture(glow::TEXTURE_2D, None);
        }
    }

    fn destroy(&self, texture: Self::Texture) {
        unsafe {
            self.gl.delete_texture(texture.raw);
        }
    }

    fn set_viewport(&self, viewport: Option<Rect>) {
        self.viewport.set(viewport);
        self.apply_viewport();
    }

    fn clear(&self, rgba: [u8; 4]) {
        let [r, g, b, a] = rgba.map(|c| c as f32 / 255.0);
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn target_size(&self) -> (u32, u32) {
        self.target_size.get()
    }
}

impl Drop for GlowBackend {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.shader.program);
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
    }
}
