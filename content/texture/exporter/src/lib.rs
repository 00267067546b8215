use std::io::Write;

use glim_texture_core::*;

#[derive(thiserror::Error, Debug)]
pub enum PngExportError {
  #[error("png encoding failed")]
  Encoding(#[from] png::EncodingError),
  #[error("io failure while writing png")]
  Io(#[from] std::io::Error),
  #[error("texture format {0:?} is not supported by the png exporter")]
  UnsupportedFormat(TextureFormat),
}

pub fn write_gpu_buffer_image_as_png(
  target: impl Write,
  image: &GPUBufferImage,
) -> Result<(), PngExportError> {
  write_raw_gpu_buffer_image_as_png(
    target,
    image.size,
    &image.data,
    image.format,
    image.bytes_per_row(),
    image.bytes_per_row(),
  )
}

/// the data may contains per row padding.
pub fn write_raw_gpu_buffer_image_as_png(
  target: impl Write,
  size: Size,
  data: &[u8],
  format: TextureFormat,
  unpadded_bytes_per_row: u32,
  padded_bytes_per_row: u32,
) -> Result<(), PngExportError> {
  let (width, height) = size.into_u32();

  assert!(unpadded_bytes_per_row <= padded_bytes_per_row);
  assert!(padded_bytes_per_row * height == data.len() as u32);

  let mut png_encoder = png::Encoder::new(target, width, height);
  png_encoder.set_depth(png::BitDepth::Eight);
  png_encoder.set_color(png::ColorType::Rgba);

  let unpadded_bytes_per_row = unpadded_bytes_per_row as usize;
  let padded_bytes_per_row = padded_bytes_per_row as usize;

  let mut png_writer = png_encoder.write_header()?;
  let mut png_writer = png_writer.stream_writer_with_size(unpadded_bytes_per_row)?;

  match format {
    TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb => {
      // from the padded buffer we write just the unpadded bytes into the image
      for chunk in data.chunks(padded_bytes_per_row) {
        png_writer.write_all(&chunk[..unpadded_bytes_per_row])?;
      }
      png_writer.finish()?;
    }
    TextureFormat::Bgra8Unorm | TextureFormat::Bgra8UnormSrgb => {
      for chunk in data.chunks(padded_bytes_per_row) {
        for px in chunk[..unpadded_bytes_per_row].chunks_exact(4) {
          png_writer.write_all(&[px[2], px[1], px[0], px[3]])?;
        }
      }
      png_writer.finish()?;
    }
    _ => return Err(PngExportError::UnsupportedFormat(format)),
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    (info, buf)
  }

  #[test]
  fn rgba_export_round_trips() {
    let image = GPUBufferImage {
      data: vec![10, 20, 30, 255, 40, 50, 60, 128],
      format: TextureFormat::Rgba8UnormSrgb,
      size: Size::from_u32_pair_min_one((2, 1)),
    };
    let mut bytes = Vec::new();
    write_gpu_buffer_image_as_png(&mut bytes, &image).unwrap();

    let (info, decoded) = decode(&bytes);
    assert_eq!((info.width, info.height), (2, 1));
    assert_eq!(decoded, image.data);
  }

  #[test]
  fn bgra_export_swizzles_to_rgba() {
    let image = GPUBufferImage {
      data: vec![30, 20, 10, 255],
      format: TextureFormat::Bgra8UnormSrgb,
      size: Size::from_u32_pair_min_one((1, 1)),
    };
    let mut bytes = Vec::new();
    write_gpu_buffer_image_as_png(&mut bytes, &image).unwrap();

    let (_, decoded) = decode(&bytes);
    assert_eq!(decoded, vec![10, 20, 30, 255]);
  }

  #[test]
  fn depth_format_is_rejected() {
    let image = GPUBufferImage {
      data: vec![0; 4],
      format: TextureFormat::Depth32Float,
      size: Size::from_u32_pair_min_one((1, 1)),
    };
    let result = write_gpu_buffer_image_as_png(&mut Vec::new(), &image);
    assert!(matches!(result, Err(PngExportError::UnsupportedFormat(_))));
  }
}
