// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use image::RgbaImage;

use crate::render::backend::{DrawCall, RenderBackend};
use crate::render::rect::Rect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendEvent {
    Upload {
        id: u32,
        label: String,
        width: u32,
        height: u32,
    },
    Draw {
        id: u32,
        call: DrawCall,
    },
    Destroy {
        id: u32,
    },
    Viewport(Option<Rect>),
    Clear([u8; 4]),
}

/// Stand-in for a GPU texture. Deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordedTexture {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    /// Copy of the uploaded pixels, for inspecting color keying.
    pub pixels: RgbaImage,
}

/// Backend without a GPU. Records every call in submission order.
#[derive(Debug)]
pub struct RecordingBackend {
    events: RefCell<Vec<BackendEvent>>,
    live: RefCell<HashSet<u32>>,
    next_id: Cell<u32>,
    fail_next_upload: RefCell<Option<String>>,
    target_size: (u32, u32),
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl RecordingBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            live: RefCell::new(HashSet::new()),
            next_id: Cell::new(1),
            fail_next_upload: RefCell::new(None),
            target_size: (width, height),
        }
    }

    /// Makes the next `upload` fail with `reason`, as a lost context would.
    pub fn fail_next_upload(&self, reason: &str) {
        *self.fail_next_upload.borrow_mut() = Some(reason.to_string());
    }

    pub fn events(&self) -> Vec<BackendEvent> {
        self.events.borrow().clone()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn draws(&self) -> Vec<(u32, DrawCall)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                BackendEvent::Draw { id, call } => Some((*id, *call)),
                _ => None,
            })
            .collect()
    }

    /// Number of uploaded textures not yet destroyed.
    pub fn live_textures(&self) -> usize {
        self.live.borrow().len()
    }

    fn record(&self, event: BackendEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl RenderBackend for RecordingBackend {
    type Texture = RecordedTexture;

    fn upload(&self, label: &str, image: &RgbaImage) -> Result<Self::Texture, String> {
        if let Some(reason) = self.fail_next_upload.borrow_mut().take() {
            return Err(reason);
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.borrow_mut().insert(id);
        self.record(BackendEvent::Upload {
            id,
            label: label.to_string(),
            width: image.width(),
            height: image.height(),
        });

        Ok(RecordedTexture {
            id,
            width: image.width(),
            height: image.height(),
            pixels: image.clone(),
        })
    }

    fn draw(&self, texture: &Self::Texture, call: DrawCall) {
        assert!(
            self.live.borrow().contains(&texture.id),
            "draw with destroyed texture {}",
            texture.id
        );
        self.record(BackendEvent::Draw {
            id: texture.id,
            call,
        });
    }

    fn destroy(&self, texture: Self::Texture) {
        let was_live = self.live.borrow_mut().remove(&texture.id);
        assert!(was_live, "texture {} destroyed twice", texture.id);
        self.record(BackendEvent::Destroy { id: texture.id });
    }

    fn set_viewport(&self, viewport: Option<Rect>) {
        self.record(BackendEvent::Viewport(viewport));
    }

    fn clear(&self, rgba: [u8; 4]) {
        self.record(BackendEvent::Clear(rgba));
    }

    fn target_size(&self) -> (u32, u32) {
        self.target_size
    }
}
