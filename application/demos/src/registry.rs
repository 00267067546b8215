use glim_scene_core::{Scene, SceneCamera};

use crate::*;

pub type BuildFn = fn(&DemoContext) -> DemoScene;
pub type AnimateFn = fn(&mut DemoScene, f32);
pub type KeyFn = fn(&mut DemoScene, char);

/// What a demo hands to the renderer each frame.
pub struct DemoScene {
  pub scene: Scene,
  pub camera: SceneCamera,
}

/// One demo program. The stem doubles as the binary name and the reference
/// screenshot key, and must match the source file under `src/bin`.
pub struct DemoEntry {
  pub stem: &'static str,
  pub build: BuildFn,
  /// driven from the context time source every frame
  pub animate: Option<AnimateFn>,
  /// windowed mode key handling
  pub on_key: Option<KeyFn>,
}

/// The in process analogue of launching a demo binary: maps a discovered stem
/// to its scene entry points, so the harness can render a demo without a
/// subprocess round trip.
pub static DEMOS: &[DemoEntry] = &[
  DemoEntry {
    stem: "axes_grid",
    build: scenes::axes_grid::build,
    animate: None,
    on_key: None,
  },
  DemoEntry {
    stem: "blend_dither",
    build: scenes::blend_dither::build,
    animate: None,
    on_key: None,
  },
  DemoEntry {
    stem: "interactive_points",
    build: scenes::interactive_points::build,
    animate: None,
    on_key: Some(scenes::interactive_points::on_key),
  },
  DemoEntry {
    stem: "orbit_cube",
    build: scenes::orbit_cube::build,
    animate: Some(scenes::orbit_cube::animate),
    on_key: None,
  },
  DemoEntry {
    stem: "points1",
    build: scenes::points1::build,
    animate: None,
    on_key: None,
  },
  DemoEntry {
    stem: "transparency1",
    build: scenes::transparency1::build,
    animate: None,
    on_key: Some(scenes::transparency1::on_key),
  },
  DemoEntry {
    stem: "triangle",
    build: scenes::triangle::build,
    animate: None,
    on_key: None,
  },
];

pub fn find(stem: &str) -> Option<&'static DemoEntry> {
  DEMOS.iter().find(|entry| entry.stem == stem)
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use example_harness::{discover_demos, screenshot_set};

  use super::*;

  fn demo_sources_root() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("bin")
  }

  #[test]
  fn registry_stems_are_unique() {
    for entry in DEMOS {
      assert_eq!(
        DEMOS.iter().filter(|e| e.stem == entry.stem).count(),
        1,
        "duplicate registry stem {}",
        entry.stem
      );
    }
  }

  #[test]
  fn registry_matches_the_demo_source_tree() {
    let demos = discover_demos(&demo_sources_root()).unwrap();

    // every screenshot flagged demo must be renderable in process
    for demo in screenshot_set(&demos) {
      assert!(
        find(&demo.stem).is_some(),
        "demo `{}` opted into screenshot testing but has no registry entry",
        demo.stem
      );
    }

    // and the registry must not carry entries without a backing binary
    for entry in DEMOS {
      assert!(
        demos.iter().any(|d| d.stem == entry.stem),
        "registry entry `{}` has no source under src/bin",
        entry.stem
      );
    }
  }
}
