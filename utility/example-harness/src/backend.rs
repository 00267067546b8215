/// Pixel comparisons are only meaningful against the software rasterizer the
/// references were produced with. Hardware adapters rasterize with subtly
/// different antialiasing and rounding, so on those the comparison step is
/// skipped and only render-without-crashing is enforced.
pub const REFERENCE_RASTERIZER_HINTS: &[&str] = &["llvmpipe", "lavapipe"];

/// Match on the adapter name reported by the gpu backend.
pub fn is_reference_rasterizer(adapter_name: &str) -> bool {
  let name = adapter_name.to_ascii_lowercase();
  REFERENCE_RASTERIZER_HINTS
    .iter()
    .any(|hint| name.contains(hint))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recognizes_the_software_rasterizer() {
    assert!(is_reference_rasterizer("llvmpipe (LLVM 17.0.6, 256 bits)"));
    assert!(is_reference_rasterizer("Lavapipe"));
  }

  #[test]
  fn hardware_adapters_are_not_reference() {
    assert!(!is_reference_rasterizer("NVIDIA GeForce RTX 3060"));
    assert!(!is_reference_rasterizer("AMD Radeon Pro 5500M"));
    assert!(!is_reference_rasterizer(""));
  }
}
