//! Image asset loading
//!
//! Decodes texture images into raw pixel buffers for GPU upload. Decoding is
//! behind the [`ImageLoader`] trait so scene preparation can run against a
//! stub in headless environments.

use image::GenericImageView;
use thiserror::Error;

/// Errors raised while turning image files into registered textures.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not load image {path}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("image {path} has {channels} channels, expected 3 or 4")]
    UnsupportedChannels { path: String, channels: u8 },
    #[error("texture registry is full ({capacity} slots)")]
    RegistryFull { capacity: usize },
}

/// A decoded image, vertically flipped, ready for texture upload.
///
/// `channels` is the channel count as decoded: 3 for opaque RGB data,
/// 4 for RGBA data with transparency. Other counts are possible from
/// custom loaders and are rejected at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

/// Source of decoded image data.
pub trait ImageLoader {
    fn load(&self, path: &str) -> Result<ImageData, AssetError>;
}

/// Loads images from the filesystem via the `image` crate.
///
/// Images are flipped vertically on load so that texture coordinates match
/// the scene's bottom-left UV origin.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &str) -> Result<ImageData, AssetError> {
        let img = image::open(path)
            .map_err(|source| AssetError::Image {
                path: path.to_string(),
                source,
            })?
            .flipv();

        let (width, height) = img.dimensions();
        let (pixels, channels) = if img.color().has_alpha() {
            (img.to_rgba8().into_raw(), 4)
        } else {
            (img.to_rgb8().into_raw(), 3)
        };

        Ok(ImageData {
            pixels,
            width,
            height,
            channels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_image_error() {
        let result = FileImageLoader.load("textures/does-not-exist.jpg");
        assert!(matches!(result, Err(AssetError::Image { .. })));
    }
}
