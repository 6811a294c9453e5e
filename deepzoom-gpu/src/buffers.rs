//! GPU buffers for one frame: uniforms, orbit table, render target, readback.

use deepzoom_compute::Uniforms;

/// Format of the render target; matches the RGBA8 byte order of `PixelBuffer`.
pub const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

const BYTES_PER_PIXEL: u32 = 4;

/// Row pitch of the readback buffer: `width * 4` rounded up to wgpu's copy alignment.
pub fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * BYTES_PER_PIXEL;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// Remove row padding from a mapped readback buffer.
pub fn strip_row_padding(padded: &[u8], width: u32, height: u32) -> Vec<u8> {
    let row_bytes = (width * BYTES_PER_PIXEL) as usize;
    let pitch = padded_bytes_per_row(width) as usize;
    let mut pixels = Vec::with_capacity(row_bytes * height as usize);
    for row in padded.chunks(pitch).take(height as usize) {
        pixels.extend_from_slice(&row[..row_bytes]);
    }
    pixels
}

/// Buffers sized for one orbit length and one frame size.
pub struct GpuBuffers {
    pub uniforms: wgpu::Buffer,
    pub orbit: wgpu::Buffer,
    pub target: wgpu::Texture,
    pub target_view: wgpu::TextureView,
    pub readback: wgpu::Buffer,
    pub orbit_len: u32,
    pub width: u32,
    pub height: u32,
}

impl GpuBuffers {
    pub fn new(device: &wgpu::Device, orbit_len: u32, width: u32, height: u32) -> Self {
        let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // vec2<f32> per orbit sample
        let orbit = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("reference_orbit"),
            size: (orbit_len as usize * std::mem::size_of::<[f32; 2]>()) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let target = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("render_target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TARGET_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());

        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("readback"),
            size: padded_bytes_per_row(width) as u64 * height as u64,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            uniforms,
            orbit,
            target,
            target_view,
            readback,
            orbit_len,
            width,
            height,
        }
    }

    pub fn fits(&self, orbit_len: u32, width: u32, height: u32) -> bool {
        self.orbit_len == orbit_len && self.width == width && self.height == height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_padded_to_copy_alignment() {
        assert_eq!(padded_bytes_per_row(1), 256);
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(3840), 15360);
    }

    #[test]
    fn padding_is_stripped_per_row() {
        let width = 3;
        let pitch = padded_bytes_per_row(width) as usize;
        let mut padded = vec![0xAA; pitch * 2];
        padded[..12].copy_from_slice(&[1; 12]);
        padded[pitch..pitch + 12].copy_from_slice(&[2; 12]);

        let pixels = strip_row_padding(&padded, width, 2);
        assert_eq!(pixels.len(), 24);
        assert!(pixels[..12].iter().all(|&b| b == 1));
        assert!(pixels[12..].iter().all(|&b| b == 2));
    }
}
