pub mod buffer_image;
pub use buffer_image::*;

use std::num::NonZeroUsize;

use wgpu_types::Extent3d;
pub use wgpu_types::TextureFormat;

/// Represent a none zero size(width/height)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
  pub width: NonZeroUsize,
  pub height: NonZeroUsize,
}

impl Size {
  pub fn area(&self) -> usize {
    usize::from(self.width) * usize::from(self.height)
  }

  pub fn from_u32_pair_min_one(size: (u32, u32)) -> Self {
    Self::from_usize_pair_min_one((size.0 as usize, size.1 as usize))
  }

  pub fn from_usize_pair_min_one(size: (usize, usize)) -> Self {
    let width = NonZeroUsize::new(size.0).unwrap_or(NonZeroUsize::new(1).unwrap());
    let height = NonZeroUsize::new(size.1).unwrap_or(NonZeroUsize::new(1).unwrap());
    Size { width, height }
  }

  pub fn into_usize(self) -> (usize, usize) {
    (self.width.into(), self.height.into())
  }

  pub fn into_u32(self) -> (u32, u32) {
    (usize::from(self.width) as u32, usize::from(self.height) as u32)
  }

  pub fn into_gpu_size(self) -> Extent3d {
    let (width, height) = self.into_u32();
    Extent3d {
      width,
      height,
      depth_or_array_layers: 1,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn size_clamps_to_min_one() {
    let size = Size::from_u32_pair_min_one((0, 7));
    assert_eq!(size.into_u32(), (1, 7));
    assert_eq!(size.area(), 7);
  }

  #[test]
  fn size_converts_to_gpu_extent() {
    let size = Size::from_usize_pair_min_one((640, 480));
    let extent = size.into_gpu_size();
    assert_eq!((extent.width, extent.height, extent.depth_or_array_layers), (640, 480, 1));
  }
}
