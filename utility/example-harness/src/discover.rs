use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Participation flags for one demo, declared by a toml sidecar next to the
/// demo source file. A missing sidecar or a missing key means the default:
/// the demo is run but not screenshot tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoFlags {
  pub run: bool,
  pub screenshot: bool,
}

impl Default for DemoFlags {
  fn default() -> Self {
    Self {
      run: true,
      screenshot: false,
    }
  }
}

#[derive(Debug, Clone)]
pub struct DemoDescriptor {
  /// demo source file
  pub source: PathBuf,
  /// sidecar manifest, when one exists
  pub manifest: Option<PathBuf>,
  /// identifier, also the binary name and the reference screenshot key
  pub stem: String,
  pub flags: DemoFlags,
}

#[derive(thiserror::Error, Debug)]
pub enum DiscoverError {
  #[error("failed to walk demo root")]
  Walk(#[from] walkdir::Error),
  #[error("failed to read demo manifest {path}")]
  ManifestRead {
    path: PathBuf,
    source: std::io::Error,
  },
  #[error("failed to parse demo manifest {path}: {source}")]
  ManifestParse {
    path: PathBuf,
    source: toml::de::Error,
  },
  #[error("demo stem `{stem}` is claimed by both {first} and {second}")]
  DuplicateStem {
    stem: String,
    first: PathBuf,
    second: PathBuf,
  },
}

/// The cargo binary naming convention: `foo.rs` is the binary `foo`, and
/// `foo/main.rs` is also the binary `foo`.
fn demo_stem(source: &Path) -> Option<String> {
  let stem = source.file_stem()?.to_str()?;
  if stem == "main" {
    Some(source.parent()?.file_name()?.to_str()?.to_string())
  } else {
    Some(stem.to_string())
  }
}

/// Walk the demo source tree (recursively, nested feature directories are
/// allowed) and produce one descriptor per demo source file. Discovery is
/// fresh on every call; nothing is cached between runs.
pub fn discover_demos(root: &Path) -> Result<Vec<DemoDescriptor>, DiscoverError> {
  let mut demos: Vec<DemoDescriptor> = Vec::new();

  for entry in walkdir::WalkDir::new(root)
    .sort_by_file_name()
    .into_iter()
  {
    let entry = entry?;
    if !entry.file_type().is_file() {
      continue;
    }
    let source = entry.path();
    if source.extension().and_then(|e| e.to_str()) != Some("rs") {
      continue;
    }
    let Some(stem) = demo_stem(source) else {
      continue;
    };

    let sidecar = source.with_extension("toml");
    let (manifest, flags) = if sidecar.is_file() {
      let text = std::fs::read_to_string(&sidecar).map_err(|source| {
        DiscoverError::ManifestRead {
          path: sidecar.clone(),
          source,
        }
      })?;
      let flags = toml::from_str(&text).map_err(|source| DiscoverError::ManifestParse {
        path: sidecar.clone(),
        source,
      })?;
      (Some(sidecar), flags)
    } else {
      (None, DemoFlags::default())
    };

    if let Some(existing) = demos.iter().find(|d| d.stem == stem) {
      return Err(DiscoverError::DuplicateStem {
        stem,
        first: existing.source.clone(),
        second: source.to_path_buf(),
      });
    }

    demos.push(DemoDescriptor {
      source: source.to_path_buf(),
      manifest,
      stem,
      flags,
    });
  }

  log::debug!("discovered {} demos under {}", demos.len(), root.display());
  Ok(demos)
}

/// Demos to execute as subprocesses: everything that did not opt out.
pub fn run_set(demos: &[DemoDescriptor]) -> Vec<&DemoDescriptor> {
  demos.iter().filter(|d| d.flags.run).collect()
}

/// Demos to screenshot test: only those that opted in. Independent of the run
/// flag by design.
pub fn screenshot_set(demos: &[DemoDescriptor]) -> Vec<&DemoDescriptor> {
  demos.iter().filter(|d| d.flags.screenshot).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
  }

  #[test]
  fn no_sidecar_means_run_but_not_test() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "demo.rs", "fn main() {}");

    let demos = discover_demos(dir.path()).unwrap();
    assert_eq!(demos.len(), 1);
    assert_eq!(demos[0].stem, "demo");
    assert_eq!(demos[0].flags, DemoFlags::default());
    assert_eq!(run_set(&demos).len(), 1);
    assert!(screenshot_set(&demos).is_empty());
  }

  #[test]
  fn opt_out_removes_from_run_set_only() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "manual.rs", "fn main() {}");
    write(dir.path(), "manual.toml", "run = false\nscreenshot = true\n");

    let demos = discover_demos(dir.path()).unwrap();
    assert!(run_set(&demos).is_empty());
    assert_eq!(screenshot_set(&demos).len(), 1);
  }

  #[test]
  fn opt_in_joins_both_sets() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "tested.rs", "fn main() {}");
    write(dir.path(), "tested.toml", "screenshot = true\n");

    let demos = discover_demos(dir.path()).unwrap();
    assert_eq!(run_set(&demos).len(), 1);
    assert_eq!(screenshot_set(&demos).len(), 1);
  }

  #[test]
  fn discovery_recurses_and_resolves_main_rs_to_directory_name() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "feature_demo/fancy/main.rs", "fn main() {}");
    write(dir.path(), "feature_demo/fancy/main.toml", "screenshot = true\n");

    let demos = discover_demos(dir.path()).unwrap();
    assert_eq!(demos.len(), 1);
    assert_eq!(demos[0].stem, "fancy");
    assert!(demos[0].flags.screenshot);
  }

  #[test]
  fn malformed_sidecar_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "broken.rs", "fn main() {}");
    write(dir.path(), "broken.toml", "runn = false\n");

    let err = discover_demos(dir.path()).unwrap_err();
    assert!(matches!(err, DiscoverError::ManifestParse { .. }));
    assert!(err.to_string().contains("broken.toml"));
  }

  #[test]
  fn duplicate_stems_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "dup.rs", "fn main() {}");
    write(dir.path(), "nested/dup.rs", "fn main() {}");

    let err = discover_demos(dir.path()).unwrap_err();
    assert!(matches!(err, DiscoverError::DuplicateStem { .. }));
  }
}
