use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use crate::*;

#[derive(Debug, Copy, Clone)]
pub struct ReadRange {
  pub size: Size,
  pub offset_x: usize,
  pub offset_y: usize,
}

impl ReadRange {
  pub fn full(size: Size) -> Self {
    Self {
      size,
      offset_x: 0,
      offset_y: 0,
    }
  }
}

#[derive(Debug, Copy, Clone)]
pub struct BufferDimensions {
  pub width: usize,
  pub height: usize,
  pub unpadded_bytes_per_row: usize,
  pub padded_bytes_per_row: usize,
}

impl BufferDimensions {
  fn new(width: usize, height: usize, format: gpu::TextureFormat) -> Self {
    let bytes_per_pixel = format.block_copy_size(None).unwrap_or(4) as usize;
    let unpadded_bytes_per_row = width * bytes_per_pixel;
    let align = gpu::COPY_BYTES_PER_ROW_ALIGNMENT as usize;
    let padded_bytes_per_row_padding = (align - unpadded_bytes_per_row % align) % align;
    let padded_bytes_per_row = unpadded_bytes_per_row + padded_bytes_per_row_padding;
    Self {
      width,
      height,
      unpadded_bytes_per_row,
      padded_bytes_per_row,
    }
  }
}

pub struct ReadableBuffer {
  buffer: gpu::Buffer,
}

impl ReadableBuffer {
  pub fn read_raw(&self) -> gpu::BufferView {
    self.buffer.slice(..).get_mapped_range()
  }
}

pub struct ReadableTextureBuffer {
  buffer: ReadableBuffer,
  info: BufferDimensions,
  format: gpu::TextureFormat,
}

impl ReadableTextureBuffer {
  pub fn info(&self) -> BufferDimensions {
    self.info
  }

  pub fn read_raw(&self) -> gpu::BufferView {
    self.buffer.read_raw()
  }

  /// strip the row padding and return a tightly packed cpu side image
  pub fn into_gpu_buffer_image(self) -> GPUBufferImage {
    let data = strip_row_padding(
      &self.buffer.read_raw(),
      self.info.unpadded_bytes_per_row,
      self.info.padded_bytes_per_row,
    );
    GPUBufferImage {
      data,
      format: self.format,
      size: Size::from_usize_pair_min_one((self.info.width, self.info.height)),
    }
  }
}

pub struct ReadBufferTask {
  buffer: Option<gpu::Buffer>,
  inner: futures::channel::oneshot::Receiver<Result<(), BufferAsyncError>>,
}

impl Future for ReadBufferTask {
  type Output = Result<ReadableBuffer, BufferAsyncError>;

  fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    match Pin::new(&mut self.inner).poll(cx) {
      Poll::Ready(r) => match r {
        Ok(Ok(())) => match self.buffer.take() {
          Some(buffer) => Poll::Ready(Ok(ReadableBuffer { buffer })),
          None => panic!("already resolved"),
        },
        // mapping failed, or the device dropped the callback
        Ok(Err(e)) => Poll::Ready(Err(e)),
        Err(_) => Poll::Ready(Err(BufferAsyncError)),
      },
      Poll::Pending => Poll::Pending,
    }
  }
}

pub struct ReadTextureTask {
  inner: ReadBufferTask,
  info: BufferDimensions,
  format: gpu::TextureFormat,
}

impl Future for ReadTextureTask {
  type Output = Result<ReadableTextureBuffer, BufferAsyncError>;

  fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let info = self.info;
    let format = self.format;
    Pin::new(&mut self.inner).poll(cx).map(|r| {
      r.map(|buffer| ReadableTextureBuffer {
        buffer,
        info,
        format,
      })
    })
  }
}

/// A staging buffer whose copy is encoded but not yet submitted. Mapping may
/// only be requested once the copy is in flight, so this stays inert until
/// [`PendingTextureRead::map_read`] is called after the submit.
pub struct PendingTextureRead {
  buffer: gpu::Buffer,
  info: BufferDimensions,
  format: gpu::TextureFormat,
}

impl PendingTextureRead {
  /// Request the mapping. The returned task resolves once the device is
  /// polled past the copy, so poll the device before blocking on it.
  pub fn map_read(self) -> ReadTextureTask {
    let buffer_slice = self.buffer.slice(..);
    // Sets the buffer up for mapping, sending over the result of the mapping back to us when it is finished.
    let (sender, receiver) = futures::channel::oneshot::channel();
    buffer_slice.map_async(gpu::MapMode::Read, move |v| {
      let _ = sender.send(v);
    });

    ReadTextureTask {
      inner: ReadBufferTask {
        inner: receiver,
        buffer: Some(self.buffer),
      },
      info: self.info,
      format: self.format,
    }
  }
}

/// Encode a texture to buffer copy into a fresh readback staging buffer.
pub fn encode_read_texture_2d(
  device: &GPUDevice,
  encoder: &mut CommandEncoder,
  texture: &gpu::Texture,
  range: ReadRange,
) -> PendingTextureRead {
  let (width, height) = range.size.into_usize();
  let buffer_dimensions = BufferDimensions::new(width, height, texture.format());

  let output_buffer = device.create_buffer(&gpu::BufferDescriptor {
    label: None,
    size: (buffer_dimensions.padded_bytes_per_row * buffer_dimensions.height) as u64,
    usage: gpu::BufferUsages::MAP_READ | gpu::BufferUsages::COPY_DST,
    mapped_at_creation: false,
  });

  encoder.copy_texture_to_buffer(
    gpu::ImageCopyTexture {
      texture,
      mip_level: 0,
      origin: gpu::Origin3d {
        x: range.offset_x as u32,
        y: range.offset_y as u32,
        z: 0,
      },
      aspect: gpu::TextureAspect::All,
    },
    gpu::ImageCopyBuffer {
      buffer: &output_buffer,
      layout: gpu::ImageDataLayout {
        offset: 0,
        bytes_per_row: Some(buffer_dimensions.padded_bytes_per_row as u32),
        rows_per_image: None,
      },
    },
    range.size.into_gpu_size(),
  );

  PendingTextureRead {
    buffer: output_buffer,
    info: buffer_dimensions,
    format: texture.format(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn row_padding_respects_copy_alignment() {
    let dims = BufferDimensions::new(640, 480, gpu::TextureFormat::Rgba8UnormSrgb);
    assert_eq!(dims.unpadded_bytes_per_row, 2560);
    assert_eq!(dims.padded_bytes_per_row, 2560);

    let dims = BufferDimensions::new(30, 2, gpu::TextureFormat::Rgba8UnormSrgb);
    assert_eq!(dims.unpadded_bytes_per_row, 120);
    assert_eq!(dims.padded_bytes_per_row % gpu::COPY_BYTES_PER_ROW_ALIGNMENT as usize, 0);
    assert_eq!(dims.padded_bytes_per_row, 256);
  }
}
