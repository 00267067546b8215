use crate::*;

#[derive(Debug, Clone, Copy)]
pub struct SolidBackground {
  pub intensity: Vec3,
}

impl SolidBackground {
  pub fn black() -> Self {
    Self {
      intensity: Vec3::ZERO,
    }
  }

  pub fn white() -> Self {
    Self {
      intensity: Vec3::ONE,
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub enum SceneBackGround {
  Solid(SolidBackground),
}

impl Default for SceneBackGround {
  fn default() -> Self {
    SceneBackGround::Solid(SolidBackground::black())
  }
}

impl SceneBackGround {
  pub fn clear_color(&self) -> Vec3 {
    match self {
      SceneBackGround::Solid(solid) => solid.intensity,
    }
  }
}
