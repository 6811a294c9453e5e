//! GPU presenter: one draw, one texture readback.

use deepzoom_compute::{OrbitBuffer, Presenter, Uniforms};
use deepzoom_core::{PixelBuffer, RenderParameters, RowOrder};

use crate::buffers::{padded_bytes_per_row, strip_row_padding, GpuBuffers};
use crate::device::GpuContext;
use crate::error::GpuError;
use crate::pipeline::GpuPipeline;

/// Renders a frame with the perturbation fragment shader.
///
/// Readback is in texture order, so frames come back [`RowOrder::TopDown`].
pub struct GpuPresenter {
    context: GpuContext,
    pipeline: GpuPipeline,
    buffers: Option<GpuBuffers>,
}

impl GpuPresenter {
    pub fn new(context: GpuContext) -> Self {
        let pipeline = GpuPipeline::new(&context.device);
        Self {
            context,
            pipeline,
            buffers: None,
        }
    }

    pub fn adapter_info(&self) -> &wgpu::AdapterInfo {
        &self.context.adapter_info
    }

    pub async fn render(
        &mut self,
        orbit: &OrbitBuffer,
        params: &RenderParameters,
    ) -> Result<PixelBuffer, GpuError> {
        orbit.validate(params)?;

        let (width, height) = params.resolution();
        let max_dimension = self.context.device.limits().max_texture_dimension_2d;
        if width > max_dimension || height > max_dimension {
            return Err(GpuError::FrameTooLarge {
                width,
                height,
                max: max_dimension,
            });
        }

        let orbit_len = orbit.len() as u32;
        if !self
            .buffers
            .as_ref()
            .is_some_and(|b| b.fits(orbit_len, width, height))
        {
            self.buffers = Some(GpuBuffers::new(
                &self.context.device,
                orbit_len,
                width,
                height,
            ));
        }
        let Some(buffers) = self.buffers.as_ref() else {
            return Err(GpuError::Unavailable("buffers not allocated".into()));
        };

        let uniforms = Uniforms::new(orbit, params);
        self.context
            .queue
            .write_buffer(&buffers.uniforms, 0, bytemuck::bytes_of(&uniforms));
        self.context
            .queue
            .write_buffer(&buffers.orbit, 0, orbit.as_bytes());

        let bind_group = self
            .context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("perturbation_bind_group"),
                layout: &self.pipeline.bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffers.uniforms.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: buffers.orbit.as_entire_binding(),
                    },
                ],
            });

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("perturbation_encoder"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("perturbation_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &buffers.target_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.pipeline.pipeline);
            pass.set_bind_group(0, &bind_group, &[]);
            pass.draw(0..3, 0..1);
        }

        encoder.copy_texture_to_buffer(
            buffers.target.as_image_copy(),
            wgpu::ImageCopyBuffer {
                buffer: &buffers.readback,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_bytes_per_row(width)),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        self.context.queue.submit(Some(encoder.finish()));

        let padded = self.read_buffer(&buffers.readback).await?;
        let pixels = strip_row_padding(&padded, width, height);

        log::debug!("GPU presenter read back {width}x{height} pixels");
        Ok(PixelBuffer::new(width, height, RowOrder::TopDown, pixels)?)
    }

    async fn read_buffer(&self, buffer: &wgpu::Buffer) -> Result<Vec<u8>, GpuError> {
        let slice = buffer.slice(..);

        let (tx, rx) = futures_channel::oneshot::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        self.context.device.poll(wgpu::Maintain::Wait);

        rx.await
            .map_err(|_| GpuError::Unavailable("Channel closed".into()))?
            .map_err(GpuError::BufferMap)?;

        let data = slice.get_mapped_range().to_vec();
        buffer.unmap();

        Ok(data)
    }
}

impl Presenter for GpuPresenter {
    type Error = GpuError;

    fn name(&self) -> &'static str {
        "gpu"
    }

    fn render_frame(
        &mut self,
        orbit: &OrbitBuffer,
        params: &RenderParameters,
    ) -> Result<PixelBuffer, Self::Error> {
        pollster::block_on(self.render(orbit, params))
    }
}
