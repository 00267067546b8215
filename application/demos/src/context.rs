use std::time::Instant;

use glim_texture_core::Size;

/// Environment override the harness sets on demo subprocesses to force the
/// offscreen single frame mode. Demo binaries read it, the library itself
/// never mutates it.
pub const FORCE_OFFSCREEN_ENV: &str = "GLIM_FORCE_OFFSCREEN";

pub fn force_offscreen_requested() -> bool {
  std::env::var(FORCE_OFFSCREEN_ENV)
    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    .unwrap_or(false)
}

/// Time is handed to demos as an explicit dependency so the harness can pin
/// it to a constant and make animated demos render deterministically.
#[derive(Debug, Clone, Copy)]
pub enum TimeSource {
  Live { started: Instant },
  Fixed(f64),
}

impl TimeSource {
  pub fn live() -> Self {
    TimeSource::Live {
      started: Instant::now(),
    }
  }

  pub fn fixed(seconds: f64) -> Self {
    TimeSource::Fixed(seconds)
  }

  pub fn seconds(&self) -> f32 {
    match self {
      TimeSource::Live { started } => started.elapsed().as_secs_f32(),
      TimeSource::Fixed(seconds) => *seconds as f32,
    }
  }
}

/// Everything a demo scene builder may depend on. Deliberately explicit, no
/// ambient process state is consulted by builders.
#[derive(Debug, Clone, Copy)]
pub struct DemoContext {
  pub size: Size,
  pub time: TimeSource,
}

impl DemoContext {
  pub fn new(size: Size, time: TimeSource) -> Self {
    Self { size, time }
  }

  pub fn aspect(&self) -> f32 {
    let (width, height) = self.size.into_u32();
    width as f32 / height as f32
  }
}
