//! Shared wiring for the end to end demo tests. The gpu touching tests are
//! opt in: they need the demo binaries built and an adapter to exist, neither
//! of which a plain unit test environment guarantees.

use std::path::{Path, PathBuf};

use example_harness::HarnessPaths;
use glim_webgpu::{GPUCreateConfig, GPU};

/// Opt in switch for the end to end demo checks, `cargo xtask run-demos`
/// and friends set it.
pub const E2E_ENV: &str = "GLIM_DEMO_E2E";

pub fn e2e_enabled() -> bool {
  std::env::var(E2E_ENV).map(|v| v == "1").unwrap_or(false)
}

pub fn workspace_root() -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR"))
    .ancestors()
    .nth(2)
    .unwrap()
    .to_path_buf()
}

pub fn harness_paths() -> HarnessPaths {
  HarnessPaths::new(workspace_root())
}

/// Any adapter will do for the non crashing guarantees; pixel comparison
/// gating happens separately on the adapter name.
pub fn acquire_gpu() -> Option<GPU> {
  let _ = env_logger::builder().is_test(true).try_init();
  match pollster::block_on(GPU::new(GPUCreateConfig::default())) {
    Ok((gpu, _)) => Some(gpu),
    Err(e) => {
      log::warn!("no usable gpu adapter, skipping: {e}");
      None
    }
  }
}
