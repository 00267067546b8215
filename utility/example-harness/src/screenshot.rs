use std::path::PathBuf;

use glim_texture_core::{GPUBufferImage, TextureFormat};
use image::RgbaImage;

use crate::*;

/// Environment toggle: when truthy, fresh renders overwrite the stored
/// references instead of being compared against them.
pub const REGENERATE_ENV: &str = "GLIM_REGENERATE_SCREENSHOTS";

pub fn regenerate_requested() -> bool {
  std::env::var(REGENERATE_ENV)
    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    .unwrap_or(false)
}

#[derive(Debug, Clone)]
pub struct ScreenshotConfig {
  pub screenshots_dir: PathBuf,
  pub diffs_dir: PathBuf,
  pub tolerance: u8,
  pub regenerate: bool,
}

impl ScreenshotConfig {
  pub fn new(paths: &HarnessPaths) -> Self {
    Self {
      screenshots_dir: paths.screenshots_dir.clone(),
      diffs_dir: paths.diffs_dir.clone(),
      tolerance: DEFAULT_TOLERANCE,
      regenerate: regenerate_requested(),
    }
  }

  pub fn reference_path(&self, stem: &str) -> PathBuf {
    self.screenshots_dir.join(format!("{stem}.png"))
  }
}

#[derive(Debug)]
pub enum ScreenshotOutcome {
  Similar,
  Dissimilar(DiffArtifactPaths),
}

#[derive(thiserror::Error, Debug)]
pub enum ScreenshotError {
  #[error(
    "demo `{stem}` opted into screenshot testing but no reference screenshot \
     exists at {path}; run the harness in regenerate mode once and commit the result"
  )]
  MissingReference { stem: String, path: PathBuf },
  #[error("failed to decode reference screenshot {path}: {source}")]
  ReferenceDecode {
    path: PathBuf,
    source: image::ImageError,
  },
  #[error("failed to write reference screenshot {path}: {source}")]
  ReferenceWrite {
    path: PathBuf,
    source: image::ImageError,
  },
  #[error("failed to update diff artifacts for `{stem}`")]
  Artifacts {
    stem: String,
    source: std::io::Error,
  },
}

/// Compare a fresh render against the stored reference of the same demo.
///
/// In regenerate mode the reference is overwritten first, which makes the
/// comparison that follows a round trip check of the freshly written file.
/// Artifacts are updated on every comparison: written when dissimilar,
/// deleted when similar.
pub fn check_screenshot(
  config: &ScreenshotConfig,
  stem: &str,
  rendered: &RgbaImage,
) -> Result<ScreenshotOutcome, ScreenshotError> {
  let reference_path = config.reference_path(stem);

  if config.regenerate {
    log::info!("regenerating reference screenshot {}", reference_path.display());
    if let Some(parent) = reference_path.parent() {
      std::fs::create_dir_all(parent).map_err(|source| ScreenshotError::Artifacts {
        stem: stem.to_string(),
        source,
      })?;
    }
    rendered
      .save(&reference_path)
      .map_err(|source| ScreenshotError::ReferenceWrite {
        path: reference_path.clone(),
        source,
      })?;
  }

  if !reference_path.is_file() {
    return Err(ScreenshotError::MissingReference {
      stem: stem.to_string(),
      path: reference_path,
    });
  }

  let stored = image::open(&reference_path)
    .map_err(|source| ScreenshotError::ReferenceDecode {
      path: reference_path.clone(),
      source,
    })?
    .into_rgba8();

  let is_similar = images_similar(rendered, &stored, config.tolerance);
  let artifacts = match diff_visualization(rendered, &stored) {
    Some(diffs) => update_diff_artifacts(&config.diffs_dir, stem, is_similar, &diffs).map_err(
      |source| ScreenshotError::Artifacts {
        stem: stem.to_string(),
        source,
      },
    )?,
    // size mismatch, nothing sensible to visualize, but the stale artifact
    // rule still applies on the next passing run
    None => diff_artifact_paths(&config.diffs_dir, stem),
  };

  if is_similar {
    Ok(ScreenshotOutcome::Similar)
  } else {
    log::warn!(
      "rendered image for demo `{stem}` differs from its reference, see {}",
      config.diffs_dir.display()
    );
    Ok(ScreenshotOutcome::Dissimilar(artifacts))
  }
}

/// Readback results arrive as tightly packed rgba8 rows; anything else is a
/// wiring mistake upstream.
pub fn gpu_image_to_rgba(image: &GPUBufferImage) -> Option<RgbaImage> {
  match image.format {
    TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb => {
      let (width, height) = image.size.into_u32();
      RgbaImage::from_raw(width, height, image.data.clone())
    }
    _ => None,
  }
}
