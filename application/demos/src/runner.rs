use std::sync::Arc;

use anyhow::Context as _;
use glim_scene_rendering::*;
use glim_texture_core::{GPUBufferImage, Size};
use glim_webgpu::*;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use crate::*;

pub const DEFAULT_DEMO_SIZE: (u32, u32) = (640, 480);

/// Entry point shared by all demo binaries: windowed showcase by default,
/// one offscreen frame and exit when the harness asks for it.
pub fn run_named(stem: &str) -> anyhow::Result<()> {
  env_logger::builder().init();

  let entry = find(stem).with_context(|| format!("demo `{stem}` is not registered"))?;
  if force_offscreen_requested() {
    run_offscreen(entry)
  } else {
    run_windowed(entry)
  }
}

fn run_offscreen(entry: &DemoEntry) -> anyhow::Result<()> {
  let (gpu, _) = pollster::block_on(GPU::new(Default::default()))?;
  let size = Size::from_u32_pair_min_one(DEFAULT_DEMO_SIZE);

  let image = render_demo_offscreen(&gpu, entry, size, TimeSource::live())?;
  anyhow::ensure!(!image.is_empty(), "offscreen render produced no pixels");

  let (width, height) = image.size.into_u32();
  log::info!("{}: rendered {width}x{height} offscreen", entry.stem);
  Ok(())
}

/// Build the demo scene under the given context and draw one frame into an
/// offscreen target, returning the tightly packed readback.
pub fn render_demo_offscreen(
  gpu: &GPU,
  entry: &DemoEntry,
  size: Size,
  time: TimeSource,
) -> anyhow::Result<GPUBufferImage> {
  let ctx = DemoContext::new(size, time);
  let mut demo = (entry.build)(&ctx);
  if let Some(animate) = entry.animate {
    animate(&mut demo, ctx.time.seconds());
  }

  let renderer = SceneRenderer::new(gpu, OFFSCREEN_COLOR_FORMAT);
  let target = OffscreenTarget::new(&gpu.device, size);

  let mut encoder = gpu.create_encoder();
  renderer.render(
    gpu,
    &mut encoder,
    &demo.scene,
    &demo.camera,
    &RenderPassTarget {
      color: &target.color_view(),
      depth: &target.depth_view(),
    },
  );
  let pending = target.encode_read_color(&gpu.device, &mut encoder);
  gpu.submit_encoder(encoder);
  let read = pending.map_read();
  gpu.poll();

  let buffer = pollster::block_on(read)?;
  Ok(buffer.into_gpu_buffer_image())
}

fn write_screenshot(image: &GPUBufferImage, path: &std::path::Path) -> anyhow::Result<()> {
  let file = std::fs::File::create(path)?;
  glim_texture_exporter::write_gpu_buffer_image_as_png(std::io::BufWriter::new(file), image)?;
  log::info!("wrote screenshot to {}", path.display());
  Ok(())
}

fn run_windowed(entry: &'static DemoEntry) -> anyhow::Result<()> {
  let event_loop = EventLoop::new()?;
  let window = WindowBuilder::new()
    .with_title(entry.stem)
    .with_inner_size(LogicalSize::new(
      DEFAULT_DEMO_SIZE.0 as f64,
      DEFAULT_DEMO_SIZE.1 as f64,
    ))
    .build(&event_loop)?;
  let window = Arc::new(window);

  let config = GPUCreateConfig {
    surface_for_compatible_check_init: Some((&window, SurfaceProvider::size(&window))),
    ..Default::default()
  };
  let (gpu, surface) = pollster::block_on(GPU::new(config))?;
  let mut surface = surface.context("windowed run always creates a surface")?;

  let renderer = SceneRenderer::new(&gpu, surface.config.format);
  let mut depth = create_depth_attachment(&gpu.device, surface.size);

  let time = TimeSource::live();
  let ctx = DemoContext::new(surface.size, time);
  let mut demo = (entry.build)(&ctx);

  event_loop.run(move |event, target| {
    let Event::WindowEvent { event, .. } = event else {
      return;
    };
    match event {
      WindowEvent::CloseRequested => target.exit(),
      WindowEvent::Resized(physical_size) => {
        let size = Size::from_u32_pair_min_one((physical_size.width, physical_size.height));
        surface.resize(size, &gpu.device);
        depth = create_depth_attachment(&gpu.device, size);
      }
      WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
        let key = match &event.logical_key {
          Key::Named(NamedKey::Space) => Some(' '),
          Key::Character(text) => text.chars().next(),
          _ => None,
        };
        let Some(key) = key else { return };
        if key == 's' {
          // draw one offscreen frame at the current time and save it
          let result = render_demo_offscreen(&gpu, entry, surface.size, time)
            .and_then(|image| write_screenshot(&image, std::path::Path::new("screenshot.png")));
          if let Err(e) = result {
            log::error!("screenshot failed: {e:?}");
          }
        } else if let Some(on_key) = entry.on_key {
          on_key(&mut demo, key);
          window.request_redraw();
        }
      }
      WindowEvent::RedrawRequested => {
        if let Some(animate) = entry.animate {
          animate(&mut demo, time.seconds());
        }

        let frame = match surface.get_current_frame() {
          Ok(frame) => frame,
          Err(e) => {
            log::warn!("dropping frame: {e:?}");
            return;
          }
        };
        let view = frame
          .texture
          .create_view(&TextureViewDescriptor::default());

        let mut encoder = gpu.create_encoder();
        renderer.render(
          &gpu,
          &mut encoder,
          &demo.scene,
          &demo.camera,
          &RenderPassTarget {
            color: &view,
            depth: &depth.create_view(&TextureViewDescriptor::default()),
          },
        );
        gpu.submit_encoder(encoder);
        frame.present();
        window.request_redraw();
      }
      _ => {}
    }
  })?;

  Ok(())
}
