use std::sync::Arc;

use crate::*;

pub trait SurfaceProvider {
  fn create_surface(
    &self,
    instance: &gpu::Instance,
  ) -> Result<gpu::Surface<'static>, CreateSurfaceError>;
  fn size(&self) -> Size;
}

impl SurfaceProvider for Arc<winit::window::Window> {
  fn create_surface(
    &self,
    instance: &gpu::Instance,
  ) -> Result<gpu::Surface<'static>, CreateSurfaceError> {
    instance.create_surface(self.clone())
  }

  fn size(&self) -> Size {
    let size = self.inner_size();
    Size::from_u32_pair_min_one((size.width, size.height))
  }
}

pub struct GPUSurface {
  pub surface: gpu::Surface<'static>,
  pub config: gpu::SurfaceConfiguration,
  pub size: Size,
}

impl GPUSurface {
  pub fn new(
    adapter: &gpu::Adapter,
    device: &GPUDevice,
    surface: gpu::Surface<'static>,
    size: Size,
  ) -> Self {
    let capabilities = surface.get_capabilities(adapter);
    let format = capabilities
      .formats
      .iter()
      .copied()
      .find(|f| f.is_srgb())
      .unwrap_or(capabilities.formats[0]);

    let (width, height) = size.into_u32();
    let config = gpu::SurfaceConfiguration {
      usage: TextureUsages::RENDER_ATTACHMENT,
      format,
      width,
      height,
      present_mode: gpu::PresentMode::Fifo,
      alpha_mode: capabilities.alpha_modes[0],
      view_formats: Vec::new(),
      desired_maximum_frame_latency: 2,
    };

    surface.configure(device, &config);

    Self {
      surface,
      config,
      size,
    }
  }

  pub fn resize(&mut self, size: Size, device: &GPUDevice) {
    let (width, height) = size.into_u32();
    self.config.width = width;
    self.config.height = height;
    self.surface.configure(device, &self.config);
    self.size = size;
  }

  pub fn get_current_frame(&mut self) -> Result<gpu::SurfaceTexture, gpu::SurfaceError> {
    self.surface.get_current_texture()
  }
}
