//! wgpu texture store
//!
//! Production [`TextureDevice`]: uploads decoded images as wgpu textures
//! with a full mipmap chain and the scene's fixed sampling policy (repeat
//! wrapping, linear filtering), and tracks which texture is current on each
//! unit so the surrounding renderer can assemble its bind groups.

use std::sync::Arc;

use log::warn;

use super::device::{TextureDevice, TextureHandle, TEXTURE_UNITS};
use crate::assets::ImageData;

/// GPU texture with its view and sampler.
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

/// Owns every scene texture for the lifetime of the process.
pub struct WgpuTextureStore {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    textures: Vec<GpuTexture>,
    bound: [Option<TextureHandle>; TEXTURE_UNITS],
}

impl WgpuTextureStore {
    pub fn new(device: Arc<wgpu::Device>, queue: Arc<wgpu::Queue>) -> Self {
        Self {
            device,
            queue,
            textures: Vec::new(),
            bound: [None; TEXTURE_UNITS],
        }
    }

    /// Texture for a previously created handle.
    pub fn texture(&self, handle: TextureHandle) -> Option<&GpuTexture> {
        self.textures.get(handle.raw() as usize)
    }

    /// Texture currently bound to `unit`, if any.
    pub fn bound(&self, unit: usize) -> Option<&GpuTexture> {
        self.bound.get(unit).copied().flatten().and_then(|handle| self.texture(handle))
    }
}

impl TextureDevice for WgpuTextureStore {
    fn create_texture(&mut self, image: &ImageData, label: &str) -> TextureHandle {
        let mut level_pixels = to_rgba(image);
        let (mut level_width, mut level_height) = (image.width.max(1), image.height.max(1));
        let mip_count = mip_level_count(level_width, level_height);

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: level_width,
                height: level_height,
                depth_or_array_layers: 1,
            },
            mip_level_count: mip_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for level in 0..mip_count {
            self.queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: level,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                &level_pixels,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * level_width),
                    rows_per_image: Some(level_height),
                },
                wgpu::Extent3d {
                    width: level_width,
                    height: level_height,
                    depth_or_array_layers: 1,
                },
            );

            if level + 1 < mip_count {
                (level_pixels, level_width, level_height) =
                    downsample(&level_pixels, level_width, level_height);
            }
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = self.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let handle = TextureHandle::new(self.textures.len() as u32);
        self.textures.push(GpuTexture {
            texture,
            view,
            sampler,
        });
        handle
    }

    fn bind(&mut self, unit: u32, handle: TextureHandle) {
        match self.bound.get_mut(unit as usize) {
            Some(slot) => *slot = Some(handle),
            None => warn!("texture unit {unit} exceeds the {TEXTURE_UNITS}-unit table"),
        }
    }
}

/// Mip levels down to 1x1 for the given base dimensions.
fn mip_level_count(width: u32, height: u32) -> u32 {
    width.max(height).ilog2() + 1
}

/// Expand 3-channel data to tightly packed RGBA; 4-channel data passes
/// through.
///
/// # Panics
///
/// Panics on any other channel count; the registry filters those out before
/// upload.
fn to_rgba(image: &ImageData) -> Vec<u8> {
    match image.channels {
        4 => image.pixels.clone(),
        3 => image
            .pixels
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
            .collect(),
        other => panic!("texture upload requires 3- or 4-channel pixels, got {other}"),
    }
}

/// Box-filter one RGBA mip level into the next. Odd dimensions clamp the
/// sample window at the edge.
fn downsample(rgba: &[u8], width: u32, height: u32) -> (Vec<u8>, u32, u32) {
    let next_width = (width / 2).max(1);
    let next_height = (height / 2).max(1);
    let mut out = Vec::with_capacity((next_width * next_height * 4) as usize);

    for y in 0..next_height {
        for x in 0..next_width {
            for channel in 0..4 {
                let mut sum = 0u32;
                for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                    let sx = (2 * x + dx).min(width - 1);
                    let sy = (2 * y + dy).min(height - 1);
                    sum += rgba[((sy * width + sx) * 4 + channel) as usize] as u32;
                }
                out.push((sum / 4) as u8);
            }
        }
    }

    (out, next_width, next_height)
}
