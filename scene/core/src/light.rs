use crate::*;

#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
  pub color_factor: Vec3,
  pub intensity: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct PointLight {
  pub color_factor: Vec3,
  /// in cd
  pub luminance_intensity: f32,
  /// in meter
  pub cutoff_distance: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
  pub color_factor: Vec3,
  /// in lux
  pub illuminance: f32,
}

#[derive(Debug, Clone, Copy)]
pub enum LightEnum {
  Ambient(AmbientLight),
  Point(PointLight),
  Directional(DirectionalLight),
}

/// Note: light properties are unaffected by node transforms, range and
/// intensity do not change with scale.
#[derive(Debug, Clone, Copy)]
pub struct SceneLight {
  pub light: LightEnum,
  pub node: NodeData,
}

impl SceneLight {
  pub fn new(light: LightEnum, node: NodeData) -> Self {
    Self { light, node }
  }
}
