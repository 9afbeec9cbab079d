// Texture loading and management system

use std::collections::HashMap;

use log::info;

use crate::engine::assets::{AssetError, AssetLoader};

/// Handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(usize);

impl TextureHandle {
    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// How UVs outside [0, 1] are sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureWrap {
    /// Sprite sheets: never bleed into a neighbouring frame
    Clamp,
    /// Scrolling backgrounds
    Repeat,
}

impl TextureWrap {
    fn address_mode(self) -> wgpu::AddressMode {
        match self {
            Self::Clamp => wgpu::AddressMode::ClampToEdge,
            Self::Repeat => wgpu::AddressMode::Repeat,
        }
    }
}

/// A loaded texture with GPU resources
///
/// The bind group keeps the texture, view and sampler alive.
pub struct Texture {
    /// Texture + sampler bound for the sprite pipeline
    pub bind_group: wgpu::BindGroup,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    /// Upload an RGBA image
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        img: &image::RgbaImage,
        wrap: TextureWrap,
        label: Option<&str>,
    ) -> Self {
        let (width, height) = img.dimensions();

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            img.as_raw(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let address_mode = wrap.address_mode();
        // Pixel art: crisp when magnified
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: address_mode,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label,
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            bind_group,
            width,
            height,
        }
    }
}

/// Manages texture loading and caching
///
/// Textures live until the manager is dropped. The same file loaded with a
/// different wrap mode gets its own sampler, so it is cached separately.
#[derive(Default)]
pub struct TextureManager {
    textures: Vec<Texture>,
    path_to_handle: HashMap<(String, TextureWrap), TextureHandle>,
}

impl TextureManager {
    /// Create a new texture manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a texture from the asset directory, reusing it if already loaded
    pub fn load_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        loader: &AssetLoader,
        name: &str,
        wrap: TextureWrap,
    ) -> Result<TextureHandle, AssetError> {
        if let Some(handle) = self.cached(name, wrap) {
            return Ok(handle);
        }

        let img = loader.load_image(name)?;
        let texture = Texture::from_image(device, queue, layout, &img, wrap, Some(name));
        info!(
            "Loaded texture: {} ({}x{})",
            loader.resolve_path(name).display(),
            texture.width,
            texture.height
        );

        let handle = TextureHandle(self.textures.len());
        self.textures.push(texture);
        self.path_to_handle.insert((name.to_string(), wrap), handle);

        Ok(handle)
    }

    /// Handle of a texture already loaded from `name` with `wrap`
    fn cached(&self, name: &str, wrap: TextureWrap) -> Option<TextureHandle> {
        self.path_to_handle.get(&(name.to_string(), wrap)).copied()
    }

    /// Get a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.0)
    }

    /// Get the number of loaded textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

impl Drop for TextureManager {
    fn drop(&mut self) {
        if !self.textures.is_empty() {
            log::debug!("Releasing {} textures", self.textures.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_is_keyed_by_wrap_mode() {
        let mut manager = TextureManager::new();
        manager
            .path_to_handle
            .insert(("Rock1.png".to_string(), TextureWrap::Repeat), TextureHandle(0));

        assert_eq!(
            manager.cached("Rock1.png", TextureWrap::Repeat),
            Some(TextureHandle(0))
        );
        assert_eq!(manager.cached("Rock1.png", TextureWrap::Clamp), None);
        assert_eq!(manager.cached("Rock2.png", TextureWrap::Repeat), None);
    }

    #[test]
    fn test_wrap_address_modes() {
        assert_eq!(
            TextureWrap::Clamp.address_mode(),
            wgpu::AddressMode::ClampToEdge
        );
        assert_eq!(TextureWrap::Repeat.address_mode(), wgpu::AddressMode::Repeat);
    }
}
