//! Opaque texture handles and the device that allocates them
//!
//! The registry never touches GPU memory itself; it asks a [`TextureDevice`]
//! for a handle and remembers which tag owns it. The production device is
//! [`WgpuTextureStore`](crate::gfx::texture_store::WgpuTextureStore); tests
//! use [`HeadlessDevice`](crate::gfx::headless::HeadlessDevice).

use crate::assets::ImageData;

/// Number of texture units the scene may occupy at once.
pub const TEXTURE_UNITS: usize = 16;

/// Identifier for a texture owned by a [`TextureDevice`].
///
/// Opaque to everything except the device that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(u32);

impl TextureHandle {
    pub(crate) fn new(raw: u32) -> Self {
        TextureHandle(raw)
    }

    /// Raw device-local index, for diagnostics only.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Allocates GPU textures and tracks which handle is current on each unit.
///
/// Uploads apply a fixed sampling policy: repeat wrapping on both axes,
/// linear minification and magnification filtering, full mipmap chain.
pub trait TextureDevice {
    /// Upload `image` and return a handle to the new texture.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `image.channels` is not 3 or 4; the
    /// registry rejects such images before they reach the device.
    fn create_texture(&mut self, image: &ImageData, label: &str) -> TextureHandle;

    /// Make `handle` current on texture unit `unit`.
    fn bind(&mut self, unit: u32, handle: TextureHandle);
}
