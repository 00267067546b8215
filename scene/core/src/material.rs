use crate::*;

/// Unlit single color material. Alpha below one marks the model as transparent
/// for the renderer's draw partitioning.
#[derive(Debug, Clone, Copy)]
pub struct FlatMaterial {
  pub color: Vec4,
}

impl FlatMaterial {
  pub fn new(color: Vec4) -> Self {
    Self { color }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct PointsMaterial {
  pub color: Vec4,
}

#[derive(Debug, Clone, Copy)]
pub enum MaterialEnum {
  Flat(FlatMaterial),
  Points(PointsMaterial),
}

impl MaterialEnum {
  pub fn color(&self) -> Vec4 {
    match self {
      MaterialEnum::Flat(m) => m.color,
      MaterialEnum::Points(m) => m.color,
    }
  }

  pub fn is_transparent(&self) -> bool {
    self.color().w < 1.
  }
}

impl From<FlatMaterial> for MaterialEnum {
  fn from(m: FlatMaterial) -> Self {
    MaterialEnum::Flat(m)
  }
}

impl From<PointsMaterial> for MaterialEnum {
  fn from(m: PointsMaterial) -> Self {
    MaterialEnum::Points(m)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn transparency_follows_alpha() {
    let opaque = MaterialEnum::from(FlatMaterial::new(Vec4::new(1., 0., 0., 1.)));
    let translucent = MaterialEnum::from(FlatMaterial::new(Vec4::new(1., 0., 0., 0.4)));
    assert!(!opaque.is_transparent());
    assert!(translucent.is_transparent());
  }
}
