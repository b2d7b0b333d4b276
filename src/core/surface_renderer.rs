use std::sync::Arc;
use wgpu::{BindGroup, Device, RenderPipeline, Surface, SurfaceConfiguration, Texture, TextureView};
use winit::window::Window;

use super::gpu_context::GpuContext;
use super::pixel_buffer::PixelBuffer;
use crate::error::{PixelWindowError, Result};

/// Blits a CPU pixel buffer onto a window surface
///
/// The buffer is uploaded to a texture of render resolution and drawn as a
/// fullscreen triangle with nearest-neighbour sampling, so each texel becomes
/// a `scale x scale` block of screen pixels. The viewport covers only
/// `render size * scale`; the clipped edge strip stays black.
pub struct SurfaceRenderer {
    gpu: GpuContext,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    render_pipeline: RenderPipeline,
    texture: Texture,
    bind_group: BindGroup,
    frame: Option<wgpu::SurfaceTexture>,
    render_width: u32,
    render_height: u32,
    scale: u32,
}

impl SurfaceRenderer {
    /// Create a renderer for a window and a buffer of `render_size`
    pub fn new(window: Arc<Window>, render_size: (u32, u32), scale: u32) -> Result<Self> {
        let size = window.inner_size();
        let (render_width, render_height) = render_size;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .map_err(|e| PixelWindowError::presentation(format!("failed to create surface: {}", e)))?;

        let (gpu, adapter) = pollster::block_on(GpuContext::new_with_surface(&instance, &surface))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| PixelWindowError::presentation("surface reports no supported formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let surface_config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(gpu.device(), &surface_config);

        let texture = Self::create_pixel_texture(gpu.device(), render_width, render_height);
        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let (render_pipeline, bind_group) =
            Self::create_render_pipeline(gpu.device(), &texture_view, surface_format);

        Ok(Self {
            gpu,
            surface,
            surface_config,
            render_pipeline,
            texture,
            bind_group,
            frame: None,
            render_width,
            render_height,
            scale,
        })
    }

    /// Acquire the next surface texture
    ///
    /// Returns false when the frame has to be skipped (surface lost, outdated
    /// or timed out); the surface is reconfigured for the next attempt.
    pub fn acquire(&mut self) -> Result<bool> {
        if self.frame.is_some() {
            return Ok(true);
        }

        match self.surface.get_current_texture() {
            Ok(frame) => {
                self.frame = Some(frame);
                Ok(true)
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                self.surface.configure(self.gpu.device(), &self.surface_config);
                Ok(false)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                Err(PixelWindowError::presentation("out of memory acquiring surface texture"))
            }
            Err(e) => {
                log::warn!("skipping frame: {}", e);
                Ok(false)
            }
        }
    }

    /// Upload the buffer and present it on the acquired surface texture
    pub fn render(&mut self, pixels: &PixelBuffer) -> Result<()> {
        if pixels.dimensions() != (self.render_width, self.render_height) {
            return Err(PixelWindowError::presentation(format!(
                "pixel dimensions {}x{} don't match texture {}x{}",
                pixels.width(),
                pixels.height(),
                self.render_width,
                self.render_height
            )));
        }

        if !self.acquire()? {
            return Ok(());
        }
        let Some(frame) = self.frame.take() else {
            return Ok(());
        };

        self.gpu.queue().write_texture(
            self.texture.as_image_copy(),
            pixels.raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.render_width),
                rows_per_image: Some(self.render_height),
            },
            wgpu::Extent3d {
                width: self.render_width,
                height: self.render_height,
                depth_or_array_layers: 1,
            },
        );

        let surface_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Pixel Blit Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Pixel Blit Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let (viewport_width, viewport_height) = self.viewport_size();
            render_pass.set_viewport(0.0, 0.0, viewport_width, viewport_height, 0.0, 1.0);
            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.draw(0..3, 0..1); // Fullscreen triangle
        }

        self.gpu.queue().submit(Some(encoder.finish()));
        frame.present();

        Ok(())
    }

    /// Reconfigure after the window's physical size changed
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.frame = None;
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(self.gpu.device(), &self.surface_config);
    }

    fn viewport_size(&self) -> (f32, f32) {
        let width = (self.render_width * self.scale).min(self.surface_config.width);
        let height = (self.render_height * self.scale).min(self.surface_config.height);
        (width as f32, height as f32)
    }

    fn create_pixel_texture(device: &Device, width: u32, height: u32) -> Texture {
        device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Pixel Buffer Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        })
    }

    fn create_render_pipeline(
        device: &Device,
        texture_view: &TextureView,
        surface_format: wgpu::TextureFormat,
    ) -> (RenderPipeline, BindGroup) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Pixel Blit Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../display.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Pixel Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
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

        // Nearest filtering keeps enlarged texels sharp
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Pixel Texture Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Pixel Texture Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Pixel Blit Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Pixel Blit Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        (pipeline, bind_group)
    }
}
