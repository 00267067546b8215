use std::ops::Deref;
use std::sync::Arc;

use crate::*;

#[derive(Clone)]
pub struct GPUDevice {
  inner: Arc<gpu::Device>,
}

impl GPUDevice {
  pub fn new(device: gpu::Device) -> Self {
    Self {
      inner: Arc::new(device),
    }
  }
}

impl Deref for GPUDevice {
  type Target = gpu::Device;

  fn deref(&self) -> &Self::Target {
    &self.inner
  }
}
