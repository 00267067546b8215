use std::path::{Path, PathBuf};

use image::{GrayImage, RgbImage, RgbaImage};

/// Maximum accepted per channel difference. A delta of exactly the tolerance
/// still counts as similar, one unit beyond does not.
pub const DEFAULT_TOLERANCE: u8 = 1;

/// Per channel absolute comparison over all four channels including alpha.
/// Differently sized images are never similar.
pub fn images_similar(a: &RgbaImage, b: &RgbaImage, tolerance: u8) -> bool {
  if a.dimensions() != b.dimensions() {
    return false;
  }
  a.as_raw()
    .iter()
    .zip(b.as_raw().iter())
    .all(|(x, y)| x.abs_diff(*y) <= tolerance)
}

/// Diff visualization split into a color part and an alpha part.
pub struct DiffImages {
  pub rgb: RgbImage,
  pub alpha: GrayImage,
}

/// Exaggerate small differences so a barely failing pixel is still visible to
/// a human: normalize to [0,1], apply a fourth root curve, rescale to u8.
fn magnify(delta: u8) -> u8 {
  (((delta as f32) / 255.).powf(0.25) * 255.) as u8
}

/// Per pixel absolute difference of the two images, magnified for visibility.
/// Returns `None` when the dimensions disagree and no meaningful per pixel
/// diff exists.
pub fn diff_visualization(a: &RgbaImage, b: &RgbaImage) -> Option<DiffImages> {
  if a.dimensions() != b.dimensions() {
    return None;
  }
  let (width, height) = a.dimensions();

  let mut rgb = RgbImage::new(width, height);
  let mut alpha = GrayImage::new(width, height);
  for (x, y, pixel) in a.enumerate_pixels() {
    let other = b.get_pixel(x, y);
    let d = |c: usize| magnify(pixel.0[c].abs_diff(other.0[c]));
    rgb.put_pixel(x, y, image::Rgb([d(0), d(1), d(2)]));
    alpha.put_pixel(x, y, image::Luma([d(3)]));
  }
  Some(DiffImages { rgb, alpha })
}

#[derive(Debug, Clone)]
pub struct DiffArtifactPaths {
  pub rgb: PathBuf,
  pub alpha: PathBuf,
}

pub fn diff_artifact_paths(diffs_dir: &Path, stem: &str) -> DiffArtifactPaths {
  DiffArtifactPaths {
    rgb: diffs_dir.join(format!("{stem}-rgb.png")),
    alpha: diffs_dir.join(format!("{stem}-alpha.png")),
  }
}

/// Keep the diff artifacts of one demo in sync with its latest comparison:
/// written on a failing comparison, removed again once the comparison passes
/// so no stale failure evidence survives.
pub fn update_diff_artifacts(
  diffs_dir: &Path,
  stem: &str,
  is_similar: bool,
  diffs: &DiffImages,
) -> std::io::Result<DiffArtifactPaths> {
  std::fs::create_dir_all(diffs_dir)?;
  let paths = diff_artifact_paths(diffs_dir, stem);

  if is_similar {
    for path in [&paths.rgb, &paths.alpha] {
      if path.exists() {
        log::info!("removing stale diff artifact {}", path.display());
        std::fs::remove_file(path)?;
      }
    }
  } else {
    diffs
      .rgb
      .save(&paths.rgb)
      .map_err(std::io::Error::other)?;
    diffs
      .alpha
      .save(&paths.alpha)
      .map_err(std::io::Error::other)?;
  }
  Ok(paths)
}
