//! Cross module scenarios for the demo regression harness, exercised on
//! synthetic demo trees so they hold on any machine, gpu or not.

use std::path::Path;

use example_harness::*;
use image::RgbaImage;

fn write(root: &Path, rel: &str, content: &str) {
  let path = root.join(rel);
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();
  std::fs::write(path, content).unwrap();
}

fn uniform(pixel: [u8; 4]) -> RgbaImage {
  RgbaImage::from_pixel(16, 16, image::Rgba(pixel))
}

fn config(root: &Path, regenerate: bool) -> ScreenshotConfig {
  ScreenshotConfig {
    screenshots_dir: root.join("screenshots"),
    diffs_dir: root.join("diffs"),
    tolerance: DEFAULT_TOLERANCE,
    regenerate,
  }
}

/// A demo without a sidecar is executed but never screenshot asserted.
#[test]
fn unmarked_demo_is_run_only() {
  let dir = tempfile::tempdir().unwrap();
  write(dir.path(), "demo.rs", "fn main() {}");
  write(dir.path(), "transparency1.rs", "fn main() {}");
  write(dir.path(), "transparency1.toml", "screenshot = true\n");
  write(dir.path(), "interactive.rs", "fn main() {}");
  write(dir.path(), "interactive.toml", "run = false\n");

  let demos = discover_demos(dir.path()).unwrap();
  let run: Vec<_> = run_set(&demos).iter().map(|d| d.stem.as_str()).collect();
  let test: Vec<_> = screenshot_set(&demos)
    .iter()
    .map(|d| d.stem.as_str())
    .collect();

  assert_eq!(run, ["demo", "transparency1"]);
  assert_eq!(test, ["transparency1"]);
}

/// Opting into screenshot testing without a committed reference is a wiring
/// failure; one regeneration run later the same comparison passes.
#[test]
fn screenshot_opt_in_without_reference_then_regenerate() {
  let dir = tempfile::tempdir().unwrap();
  let rendered = uniform([200, 60, 20, 255]);

  let err = check_screenshot(&config(dir.path(), false), "transparency1", &rendered).unwrap_err();
  assert!(matches!(err, ScreenshotError::MissingReference { .. }));
  assert!(err.to_string().contains("screenshots"));

  check_screenshot(&config(dir.path(), true), "transparency1", &rendered).unwrap();

  let outcome = check_screenshot(&config(dir.path(), false), "transparency1", &rendered).unwrap();
  assert!(matches!(outcome, ScreenshotOutcome::Similar));
}

/// A uniform drift of two units trips the comparison and leaves both diff
/// artifacts on disk for inspection, keyed by the demo stem.
#[test]
fn regression_produces_inspectable_artifacts() {
  let dir = tempfile::tempdir().unwrap();
  check_screenshot(&config(dir.path(), true), "transparency1", &uniform([50, 50, 50, 128]))
    .unwrap();

  let outcome = check_screenshot(
    &config(dir.path(), false),
    "transparency1",
    &uniform([52, 52, 52, 130]),
  )
  .unwrap();

  let ScreenshotOutcome::Dissimilar(artifacts) = outcome else {
    panic!("delta 2 exceeds the tolerance of 1");
  };
  assert!(artifacts.rgb.ends_with("transparency1-rgb.png"));
  assert!(artifacts.alpha.ends_with("transparency1-alpha.png"));
  assert!(artifacts.rgb.exists());
  assert!(artifacts.alpha.exists());
}
