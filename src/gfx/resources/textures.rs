//! Texture registry
//!
//! Maps symbolic tags to GPU texture handles. Registration order is
//! load-bearing: entry `i` is bound to texture unit `i`, and the shader
//! selects textures by that unit index.

use log::info;

use crate::assets::{AssetError, ImageLoader};
use crate::gfx::device::{TextureDevice, TextureHandle, TEXTURE_UNITS};

/// One registered texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    pub tag: String,
    pub handle: TextureHandle,
}

/// Append-only, insertion-ordered texture registry.
///
/// Lookups scan linearly and return the first match, so a duplicate tag is
/// shadowed by the earlier registration.
#[derive(Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `path` and register it under `tag`.
    ///
    /// Fails without registering anything when the registry is full, the
    /// image cannot be decoded, or its channel count is not 3 or 4. A failed
    /// registration shifts no slots: later successes stay contiguous.
    pub fn register(
        &mut self,
        loader: &dyn ImageLoader,
        device: &mut dyn TextureDevice,
        path: &str,
        tag: &str,
    ) -> Result<(), AssetError> {
        if self.entries.len() >= TEXTURE_UNITS {
            return Err(AssetError::RegistryFull {
                capacity: TEXTURE_UNITS,
            });
        }

        let image = loader.load(path)?;
        if image.channels != 3 && image.channels != 4 {
            return Err(AssetError::UnsupportedChannels {
                path: path.to_string(),
                channels: image.channels,
            });
        }

        let handle = device.create_texture(&image, tag);
        info!(
            "loaded texture {path}: {}x{}, {} channels",
            image.width, image.height, image.channels
        );

        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });
        Ok(())
    }

    /// Bind entry `i` to texture unit `i`. Call once after all
    /// registrations, before any draw that samples textures.
    pub fn bind_all(&self, device: &mut dyn TextureDevice) {
        for (unit, entry) in self.entries.iter().enumerate() {
            device.bind(unit as u32, entry.handle);
        }
    }

    /// Texture-unit slot for `tag`: its registration-order index.
    ///
    /// `None` means the tag was never registered; callers must treat that as
    /// "no texture", not as unit 0.
    pub fn slot(&self, tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map(|index| index as u32)
    }

    /// GPU handle for `tag`.
    pub fn handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
