mod device;
mod queue;
mod read;
mod surface;
mod target;

use std::sync::Arc;

pub use device::*;
pub use glim_texture_core::*;
// note: we can not just use * because it cause core conflict
pub use gpu::{
  util, util::DeviceExt, vertex_attr_array, Backends, BlendState, Buffer, BufferAsyncError, Color,
  ColorTargetState, ColorWrites, CommandEncoder, CompareFunction, CreateSurfaceError, DepthBiasState,
  DepthStencilState, Features, FragmentState, IndexFormat, Limits, LoadOp, Operations,
  PipelineLayoutDescriptor, PowerPreference, PrimitiveState, RenderPassColorAttachment,
  RenderPassDepthStencilAttachment, RenderPassDescriptor, RenderPipeline, RenderPipelineDescriptor,
  RequestDeviceError, ShaderModuleDescriptor, ShaderSource, StencilState, StoreOp, Texture,
  TextureView, TextureViewDescriptor, VertexBufferLayout, VertexState,
};
pub use queue::*;
pub use read::*;
pub use surface::*;
pub use target::*;
pub use wgpu;
pub(crate) use wgpu as gpu;
pub use wgpu_types::*;

#[derive(Clone)]
pub struct GPU {
  _instance: Arc<gpu::Instance>,
  _adapter: Arc<gpu::Adapter>,
  pub info: GPUInfo,
  pub device: GPUDevice,
  pub queue: GPUQueue,
}

pub struct GPUCreateConfig<'a> {
  pub backends: Backends,
  pub power_preference: PowerPreference,
  pub surface_for_compatible_check_init: Option<(&'a (dyn SurfaceProvider + 'a), Size)>,
  pub minimal_required_features: Features,
  pub minimal_required_limits: Limits,
}

impl<'a> Default for GPUCreateConfig<'a> {
  fn default() -> Self {
    Self {
      backends: Backends::all(),
      power_preference: PowerPreference::HighPerformance,
      surface_for_compatible_check_init: None,
      minimal_required_features: Features::empty(),
      minimal_required_limits: Limits::downlevel_defaults(),
    }
  }
}

#[derive(Clone)]
pub struct GPUInfo {
  pub requested_backend_type: Backends,
  pub power_preference: PowerPreference,
  pub adapter_info: AdapterInfo,
  pub supported_features: Features,
  pub supported_limits: Limits,
}

#[derive(thiserror::Error, Debug)]
pub enum GPUCreateFailure {
  #[error("Failed to request adapter, reasons unknown")]
  AdapterRequestFailed,
  #[error("Failed to request adapter, because failed to create test compatible surface")]
  AdapterRequestFailedByUnableCreateTestCompatibleSurface(#[from] CreateSurfaceError),
  #[error(
    "Failed to create device because the the adapter can not meet the minimal feature requirement"
  )]
  UnableToMeetFeatureMinimalRequirement(Features),
  #[error(
    "Failed to create device because the the adapter can not meet the minimal limit requirement"
  )]
  UnableToMeetLimitMinimalRequirement(Box<Limits>),
  #[error("Failed to create device, reasons unknown")]
  DeviceQueueCreateFailedUnknownReason(#[from] RequestDeviceError),
}

impl GPU {
  /// in some backend for example WebGL, the surface is required to create the instance, we have to
  /// return the init surface with the gpu itself
  pub async fn new(
    config: GPUCreateConfig<'_>,
  ) -> Result<(Self, Option<GPUSurface>), GPUCreateFailure> {
    let _instance = gpu::Instance::new(gpu::InstanceDescriptor {
      backends: config.backends,
      ..Default::default()
    });

    let init_surface = config
      .surface_for_compatible_check_init
      .map(|s| s.0.create_surface(&_instance))
      .transpose()?;

    let _adapter = _instance
      .request_adapter(&gpu::RequestAdapterOptions {
        power_preference: config.power_preference,
        compatible_surface: init_surface.as_ref(),
        force_fallback_adapter: false,
      })
      .await
      .ok_or(GPUCreateFailure::AdapterRequestFailed)?;

    let supported_features = _adapter.features();
    let supported_limits = _adapter.limits();

    if !config
      .minimal_required_limits
      .check_limits(&supported_limits)
    {
      return Err(GPUCreateFailure::UnableToMeetLimitMinimalRequirement(
        supported_limits.into(),
      ));
    }
    if !supported_features.contains(config.minimal_required_features) {
      return Err(GPUCreateFailure::UnableToMeetFeatureMinimalRequirement(
        config.minimal_required_features - supported_features,
      ));
    }

    let (device, queue) = _adapter
      .request_device(
        &gpu::DeviceDescriptor {
          label: None,
          required_features: config.minimal_required_features,
          required_limits: config.minimal_required_limits,
          memory_hints: MemoryHints::Performance,
        },
        None,
      )
      .await?;

    let adapter_info = _adapter.get_info();
    log::info!(
      "using adapter: {} ({:?} backend)",
      adapter_info.name,
      adapter_info.backend
    );

    let device = GPUDevice::new(device);
    let queue = GPUQueue::new(queue);

    let info = GPUInfo {
      requested_backend_type: config.backends,
      power_preference: config.power_preference,
      adapter_info,
      supported_features,
      supported_limits,
    };

    let surface = init_surface.map(|init_surface| {
      GPUSurface::new(
        &_adapter,
        &device,
        init_surface,
        config.surface_for_compatible_check_init.as_ref().unwrap().1,
      )
    });

    let gpu = Self {
      _instance: Arc::new(_instance),
      _adapter: Arc::new(_adapter),
      info,
      device,
      queue,
    };

    Ok((gpu, surface))
  }

  pub fn poll(&self) {
    self._instance.poll_all(true);
  }

  pub fn create_encoder(&self) -> CommandEncoder {
    self
      .device
      .create_command_encoder(&gpu::CommandEncoderDescriptor { label: None })
  }

  pub fn submit_encoder(&self, encoder: CommandEncoder) {
    self.queue.submit(Some(encoder.finish()));
  }
}
