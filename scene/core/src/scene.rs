use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneModelHandle(pub usize);

#[derive(Debug, Clone)]
pub struct SceneModel {
  pub mesh: MeshData,
  pub material: MaterialEnum,
  pub node: NodeData,
}

impl SceneModel {
  pub fn new(mesh: MeshData, material: impl Into<MaterialEnum>, node: NodeData) -> Self {
    Self {
      mesh,
      material: material.into(),
      node,
    }
  }
}

/// Flat world object container. Models are drawn in insertion order, which is
/// what makes ordered transparency reproducible.
#[derive(Default)]
pub struct Scene {
  pub background: Option<SceneBackGround>,
  pub models: Vec<SceneModel>,
  pub lights: Vec<SceneLight>,
}

impl Scene {
  pub fn new() -> Self {
    Default::default()
  }

  pub fn set_background(&mut self, background: Option<SceneBackGround>) {
    self.background = background;
  }

  pub fn add_model(&mut self, model: SceneModel) -> SceneModelHandle {
    self.models.push(model);
    SceneModelHandle(self.models.len() - 1)
  }

  pub fn add_light(&mut self, light: SceneLight) {
    self.lights.push(light);
  }

  /// Move the first model to the back of the draw order.
  pub fn cycle_model_order(&mut self) {
    if self.models.len() > 1 {
      self.models.rotate_left(1);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn colored_plane(alpha: f32) -> SceneModel {
    SceneModel::new(
      MeshData::plane(1., 1.),
      FlatMaterial::new(Vec4::new(1., 0., 0., alpha)),
      NodeData::default(),
    )
  }

  #[test]
  fn model_handles_are_insertion_ordered() {
    let mut scene = Scene::new();
    let a = scene.add_model(colored_plane(1.));
    let b = scene.add_model(colored_plane(0.5));
    assert_eq!(a, SceneModelHandle(0));
    assert_eq!(b, SceneModelHandle(1));
  }

  #[test]
  fn cycling_rotates_draw_order() {
    let mut scene = Scene::new();
    scene.add_model(colored_plane(0.1));
    scene.add_model(colored_plane(0.2));
    scene.add_model(colored_plane(0.3));
    scene.cycle_model_order();
    assert_eq!(scene.models[0].material.color().w, 0.2);
    assert_eq!(scene.models[2].material.color().w, 0.1);
  }
}
