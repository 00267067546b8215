use crate::*;

pub const OFFSCREEN_COLOR_FORMAT: TextureFormat = TextureFormat::Rgba8UnormSrgb;
pub const OFFSCREEN_DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;

/// Offscreen color/depth pair that can be rendered into and read back.
/// The depth half of a render target pair.
pub fn create_depth_attachment(device: &GPUDevice, size: Size) -> gpu::Texture {
  device.create_texture(&gpu::TextureDescriptor {
    label: Some("depth-attachment"),
    size: size.into_gpu_size(),
    mip_level_count: 1,
    sample_count: 1,
    dimension: gpu::TextureDimension::D2,
    format: OFFSCREEN_DEPTH_FORMAT,
    usage: TextureUsages::RENDER_ATTACHMENT,
    view_formats: &[],
  })
}

pub struct OffscreenTarget {
  pub color: gpu::Texture,
  pub depth: gpu::Texture,
  pub size: Size,
}

impl OffscreenTarget {
  pub fn new(device: &GPUDevice, size: Size) -> Self {
    let color = device.create_texture(&gpu::TextureDescriptor {
      label: Some("offscreen-color"),
      size: size.into_gpu_size(),
      mip_level_count: 1,
      sample_count: 1,
      dimension: gpu::TextureDimension::D2,
      format: OFFSCREEN_COLOR_FORMAT,
      usage: TextureUsages::RENDER_ATTACHMENT | TextureUsages::COPY_SRC,
      view_formats: &[],
    });

    let depth = create_depth_attachment(device, size);

    Self { color, depth, size }
  }

  pub fn color_view(&self) -> TextureView {
    self.color.create_view(&TextureViewDescriptor::default())
  }

  pub fn depth_view(&self) -> TextureView {
    self.depth.create_view(&TextureViewDescriptor::default())
  }

  /// Encode the readback of the full color attachment.
  pub fn encode_read_color(
    &self,
    device: &GPUDevice,
    encoder: &mut CommandEncoder,
  ) -> PendingTextureRead {
    encode_read_texture_2d(device, encoder, &self.color, ReadRange::full(self.size))
  }
}
