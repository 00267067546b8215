use crate::*;

#[derive(Debug, Clone, Copy)]
pub struct OrthographicCamera {
  pub width: f32,
  pub height: f32,
  pub near: f32,
  pub far: f32,
}

impl OrthographicCamera {
  pub fn new(width: f32, height: f32) -> Self {
    Self {
      width,
      height,
      near: -500.,
      far: 500.,
    }
  }

  pub fn projection_matrix(&self) -> Mat4 {
    let w = self.width / 2.;
    let h = self.height / 2.;
    Mat4::orthographic_rh(-w, w, -h, h, self.near, self.far)
  }
}

#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
  /// vertical field of view in radians
  pub fov_y: f32,
  pub aspect: f32,
  pub near: f32,
  pub far: f32,
}

impl PerspectiveCamera {
  pub fn new(fov_y_degrees: f32, aspect: f32) -> Self {
    Self {
      fov_y: fov_y_degrees.to_radians(),
      aspect,
      near: 0.1,
      far: 2000.,
    }
  }

  pub fn projection_matrix(&self) -> Mat4 {
    Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
  }
}

#[derive(Debug, Clone, Copy)]
pub enum CameraEnum {
  Orthographic(OrthographicCamera),
  Perspective(PerspectiveCamera),
}

impl CameraEnum {
  pub fn projection_matrix(&self) -> Mat4 {
    match self {
      CameraEnum::Orthographic(c) => c.projection_matrix(),
      CameraEnum::Perspective(c) => c.projection_matrix(),
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct SceneCamera {
  pub camera: CameraEnum,
  pub node: NodeData,
}

impl SceneCamera {
  pub fn new(camera: CameraEnum, node: NodeData) -> Self {
    Self { camera, node }
  }

  /// Place the camera at `eye`, facing `target`, with +y up.
  pub fn look_at(&mut self, eye: Vec3, target: Vec3) {
    self.node.local_matrix = Mat4::look_at_rh(eye, target, Vec3::Y).inverse();
  }

  pub fn view_matrix(&self) -> Mat4 {
    self.node.local_matrix.inverse()
  }

  pub fn view_projection(&self) -> Mat4 {
    self.camera.projection_matrix() * self.view_matrix()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn orthographic_maps_extent_to_clip_corner() {
    let camera = SceneCamera::new(
      CameraEnum::Orthographic(OrthographicCamera::new(100., 100.)),
      NodeData::default(),
    );
    let clip = camera.view_projection() * Vec4::new(50., 50., 0., 1.);
    assert!((clip.x - 1.).abs() < 1e-5);
    assert!((clip.y - 1.).abs() < 1e-5);
  }

  #[test]
  fn look_at_points_towards_target() {
    let mut camera = SceneCamera::new(
      CameraEnum::Perspective(PerspectiveCamera::new(70., 16. / 9.)),
      NodeData::default(),
    );
    camera.look_at(Vec3::new(0., 0., 10.), Vec3::ZERO);
    assert!((camera.node.position() - Vec3::new(0., 0., 10.)).length() < 1e-5);

    // the target should land on the view space -z axis
    let view = camera.view_matrix() * Vec4::new(0., 0., 0., 1.);
    assert!(view.z < 0.);
    assert!(view.x.abs() < 1e-5 && view.y.abs() < 1e-5);
  }
}
