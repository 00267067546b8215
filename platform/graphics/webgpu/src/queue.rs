use std::ops::Deref;
use std::sync::Arc;

use crate::*;

#[derive(Clone)]
pub struct GPUQueue {
  inner: Arc<gpu::Queue>,
}

impl GPUQueue {
  pub fn new(queue: gpu::Queue) -> Self {
    Self {
      inner: Arc::new(queue),
    }
  }
}

impl Deref for GPUQueue {
  type Target = gpu::Queue;

  fn deref(&self) -> &Self::Target {
    &self.inner
  }
}
