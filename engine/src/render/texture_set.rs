// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::path::Path;
use std::rc::Rc;

use crate::error::TextureError;
use crate::render::backend::RenderBackend;
use crate::render::texture::TextureHandle;
use crate::settings::LoadFailurePolicy;

/// Owned textures keyed by a small closed set of logical states.
pub struct TextureSet<K, B: RenderBackend> {
    backend: Rc<B>,
    textures: HashMap<K, TextureHandle<B>>,
}

/// Outcome of [`TextureSet::load_all`]. Successful entries are already in the set.
#[derive(Debug)]
pub struct LoadReport<K> {
    pub loaded: Vec<K>,
    pub failed: Vec<(K, TextureError)>,
}

impl<K: fmt::Debug> LoadReport<K> {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Applies the media policy. `Abort` surfaces the first failure, `Continue`
    /// accepts a partial set and leaves the failed keys unloaded.
    pub fn enforce(self, policy: LoadFailurePolicy) -> Result<(), TextureError> {
        if self.failed.len() > 1 {
            log::warn!("{} textures failed to load", self.failed.len());
        }
        match self.failed.into_iter().next() {
            Some((_, first)) => policy.check(Err(first)),
            None => Ok(()),
        }
    }
}

impl<K, B> fmt::Debug for TextureSet<K, B>
where
    K: fmt::Debug,
    B: RenderBackend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.textures.iter()).finish()
    }
}

impl<K, B> TextureSet<K, B>
where
    K: Copy + Eq + Hash + fmt::Debug,
    B: RenderBackend,
{
    pub fn new(backend: Rc<B>) -> Self {
        Self {
            backend,
            textures: HashMap::new(),
        }
    }

    /// Loads each entry independently. A failed entry does not stop the rest.
    pub fn load_all<P: AsRef<Path>>(&mut self, entries: &[(K, P)]) -> LoadReport<K> {
        let mut report = LoadReport {
            loaded: Vec::with_capacity(entries.len()),
            failed: Vec::new(),
        };

        for (key, path) in entries {
            let texture = self
                .textures
                .entry(*key)
                .or_insert_with(|| TextureHandle::new(self.backend.clone()));
            match texture.load(path) {
                Ok(()) => report.loaded.push(*key),
                Err(err) => {
                    log::error!("Failed to load {:?} image", key);
                    report.failed.push((*key, err));
                }
            }
        }

        report
    }

    pub fn get(&self, key: K) -> Option<&TextureHandle<B>> {
        self.textures.get(&key)
    }

    pub fn is_loaded(&self, key: K) -> bool {
        self.get(key).is_some_and(TextureHandle::is_loaded)
    }
}
