// Sprite rendering system

use glam::Vec2;
use log::warn;
use wgpu::util::DeviceExt;

use super::texture::{TextureHandle, TextureManager};
use super::vertex::{SpriteInstance, Vertex};

/// Most sprites drawn in a single frame
pub const MAX_SPRITES: usize = 64;

/// One textured quad to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub texture: TextureHandle,
    /// Centre in normalized device coordinates
    pub center: Vec2,
    /// Full width and height in normalized device coordinates
    pub size: Vec2,
    pub uv_offset: Vec2,
    pub uv_scale: Vec2,
    pub flip_x: bool,
}

impl SpriteDraw {
    /// Pack into the per-instance vertex layout
    pub fn instance(&self) -> SpriteInstance {
        SpriteInstance {
            center: self.center.to_array(),
            size: self.size.to_array(),
            uv_offset: self.uv_offset.to_array(),
            uv_scale: self.uv_scale.to_array(),
            flip_x: if self.flip_x { 1.0 } else { 0.0 },
        }
    }
}

/// Sprite renderer using instanced rendering
///
/// Every sprite shares one unit quad. Draws are issued in submission order,
/// one instance each, so later sprites end up on top.
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    texture_bind_group_layout: wgpu::BindGroupLayout,
    queued: Vec<TextureHandle>,
}

impl SpriteRenderer {
    /// Create a new sprite renderer
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Texture Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc(), SpriteInstance::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let vertices = quad_vertices();
        let indices: [u16; 6] = [0, 1, 2, 0, 2, 3];

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sprite Instance Buffer"),
            size: (MAX_SPRITES * std::mem::size_of::<SpriteInstance>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
            instance_buffer,
            texture_bind_group_layout,
            queued: Vec::with_capacity(MAX_SPRITES),
        }
    }

    /// Layout every sprite texture must be bound with
    pub fn texture_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_bind_group_layout
    }

    /// Upload this frame's sprites, replacing the previous frame's
    pub fn prepare(&mut self, queue: &wgpu::Queue, draws: &[SpriteDraw]) {
        let draws = if draws.len() > MAX_SPRITES {
            warn!(
                "Dropping {} sprites over the per-frame limit of {}",
                draws.len() - MAX_SPRITES,
                MAX_SPRITES
            );
            &draws[..MAX_SPRITES]
        } else {
            draws
        };

        self.queued.clear();
        if draws.is_empty() {
            return;
        }

        let instances: Vec<SpriteInstance> = draws.iter().map(SpriteDraw::instance).collect();
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        self.queued.extend(draws.iter().map(|draw| draw.texture));
    }

    /// Draw the prepared sprites
    pub fn render<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        texture_manager: &'a TextureManager,
    ) {
        if self.queued.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

        for (i, handle) in self.queued.iter().enumerate() {
            let Some(texture) = texture_manager.get(*handle) else {
                continue;
            };
            let instance = i as u32;
            render_pass.set_bind_group(0, &texture.bind_group, &[]);
            render_pass.draw_indexed(0..6, 0, instance..instance + 1);
        }
    }
}

/// Unit square centred at the origin, v = 0 along the top edge
fn quad_vertices() -> [Vertex; 4] {
    [
        Vertex::new(Vec2::new(-0.5, -0.5), Vec2::new(0.0, 1.0)),
        Vertex::new(Vec2::new(0.5, -0.5), Vec2::new(1.0, 1.0)),
        Vertex::new(Vec2::new(0.5, 0.5), Vec2::new(1.0, 0.0)),
        Vertex::new(Vec2::new(-0.5, 0.5), Vec2::new(0.0, 0.0)),
    ]
}
