use wgpu_types::TextureFormat;

use crate::Size;

/// A tightly packed cpu side image buffer, laid out exactly as the gpu texture rows
/// without any row padding.
#[derive(Debug, Clone)]
pub struct GPUBufferImage {
  pub data: Vec<u8>,
  pub format: TextureFormat,
  pub size: Size,
}

impl GPUBufferImage {
  pub fn bytes_per_pixel(&self) -> u32 {
    self.format.block_copy_size(None).unwrap_or(4)
  }

  pub fn bytes_per_row(&self) -> u32 {
    let (width, _) = self.size.into_u32();
    width * self.bytes_per_pixel()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }
}

pub fn create_padding_buffer(
  input: &[u8],
  step_read_byte_count: usize,
  step_pad_bytes: &[u8],
) -> Vec<u8> {
  input
    .chunks(step_read_byte_count)
    .flat_map(|c| [c, step_pad_bytes])
    .flatten()
    .copied()
    .collect()
}

/// Inverse of [`create_padding_buffer`], drops the per row padding a gpu readback
/// buffer carries to satisfy the copy alignment requirement.
pub fn strip_row_padding(
  input: &[u8],
  unpadded_bytes_per_row: usize,
  padded_bytes_per_row: usize,
) -> Vec<u8> {
  assert!(unpadded_bytes_per_row <= padded_bytes_per_row);
  input
    .chunks(padded_bytes_per_row)
    .flat_map(|row| &row[..unpadded_bytes_per_row])
    .copied()
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn padding_round_trips() {
    let tight: Vec<u8> = (0..12).collect();
    let padded = create_padding_buffer(&tight, 4, &[0xff, 0xff]);
    assert_eq!(padded.len(), 18);
    let stripped = strip_row_padding(&padded, 4, 6);
    assert_eq!(stripped, tight);
  }

  #[test]
  fn rgba8_row_stride() {
    let image = GPUBufferImage {
      data: vec![0; 8 * 2 * 4],
      format: TextureFormat::Rgba8UnormSrgb,
      size: Size::from_u32_pair_min_one((8, 2)),
    };
    assert_eq!(image.bytes_per_row(), 32);
    assert!(!image.is_empty());
  }
}
