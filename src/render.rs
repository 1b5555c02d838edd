use crate::constants::{CLEAR_COLOR, SHELL_COLOR, SHELL_OPACITY};
use crate::core::{Gallery, ItemId};
use fnv::FnvHashMap;
use web_sys as web;

mod helpers;
mod planes;
mod shell;
mod targets;
use planes::{create_plane_resources, ItemTexture, PlaneInstance, PlaneResources};
use shell::{create_shell_resources, ShellResources};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    group: [[f32; 4]; 4],
    shell_color: [f32; 4],
    shell_params: [f32; 4],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    shell: ShellResources,
    planes: PlaneResources,
    textures: FnvHashMap<ItemId, ItemTexture>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, expected_items: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no texture formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gallery_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::GALLERY_WGSL.into()),
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals_ub"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let shell = create_shell_resources(&device, &shader, &globals_bgl, format);
        let planes = create_plane_resources(&device, &shader, &globals_bgl, format, expected_items);
        let targets = RenderTargets::new(&device, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            globals_buffer,
            globals_bg,
            shell,
            planes,
            textures: FnvHashMap::default(),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    /// Upload a decoded image as the texture for `item`.
    pub fn upload_image(&mut self, item: ItemId, img: &web::HtmlImageElement) {
        let tex = self.planes.upload_image(&self.device, &self.queue, img);
        log::debug!(
            "[gpu] texture {} {}x{}",
            item,
            tex.texture.width(),
            tex.texture.height()
        );
        if let Some(old) = self.textures.insert(item, tex) {
            old.texture.destroy();
        }
    }

    /// Re-apply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            log::debug!("[gpu] surface resized to {}x{}", width, height);
        }
    }

    /// Draw one frame: textured planes first, then the translucent shell.
    pub fn render(&mut self, gallery: &Gallery) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals {
            view_proj: gallery.camera().view_projection().to_cols_array_2d(),
            group: gallery.group_matrix().to_cols_array_2d(),
            shell_color: [SHELL_COLOR[0], SHELL_COLOR[1], SHELL_COLOR[2], SHELL_OPACITY],
            shell_params: [gallery.radius(), 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        // Only placed items with an uploaded texture are drawn.
        let mut draws: Vec<(ItemId, PlaneInstance)> = Vec::with_capacity(gallery.items().len());
        for item in gallery.items() {
            let Some(placement) = item.placement else {
                continue;
            };
            if self.textures.contains_key(&item.id) {
                draws.push((
                    item.id,
                    PlaneInstance {
                        model: placement.local_matrix().to_cols_array_2d(),
                    },
                ));
            }
        }
        self.planes.ensure_capacity(&self.device, draws.len());
        if !draws.is_empty() {
            let instances: Vec<PlaneInstance> = draws.iter().map(|(_, inst)| *inst).collect();
            self.queue.write_buffer(
                &self.planes.instance_vb,
                0,
                bytemuck::cast_slice(&instances),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !draws.is_empty() {
                rpass.set_pipeline(&self.planes.pipeline);
                rpass.set_bind_group(0, &self.globals_bg, &[]);
                rpass.set_vertex_buffer(0, self.planes.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.planes.instance_vb.slice(..));
                for (slot, (id, _)) in draws.iter().enumerate() {
                    if let Some(tex) = self.textures.get(id) {
                        let slot = slot as u32;
                        rpass.set_bind_group(1, &tex.bind_group, &[]);
                        rpass.draw(0..6, slot..slot + 1);
                    }
                }
            }

            rpass.set_pipeline(&self.shell.pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_vertex_buffer(0, self.shell.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.shell.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.shell.index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
