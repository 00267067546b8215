//! Transparency using three overlapping planes.
//!
//! Press space to cycle the draw order of the planes, press `.` to toggle the
//! background between black and white.

use glim_scene_core::*;

use crate::*;

pub fn build(_ctx: &DemoContext) -> DemoScene {
  let mut scene = Scene::new();
  scene.set_background(Some(SceneBackGround::Solid(SolidBackground::black())));

  let colors = [
    Vec4::new(1., 0., 0., 0.4),
    Vec4::new(0., 1., 0., 0.4),
    Vec4::new(0., 0., 1., 0.4),
  ];
  let positions = [
    Vec3::new(-10., -10., 1.),
    Vec3::new(0., 0., 2.),
    Vec3::new(10., 10., 3.),
  ];
  for (color, position) in colors.into_iter().zip(positions) {
    scene.add_model(SceneModel::new(
      MeshData::plane(50., 50.),
      FlatMaterial::new(color),
      NodeData::at(position),
    ));
  }

  let mut camera = SceneCamera::new(
    CameraEnum::Orthographic(OrthographicCamera::new(100., 100.)),
    NodeData::default(),
  );
  camera.look_at(Vec3::new(0., 0., 100.), Vec3::ZERO);

  DemoScene { scene, camera }
}

pub fn on_key(demo: &mut DemoScene, key: char) {
  match key {
    ' ' => {
      log::info!("rotating scene element order");
      demo.scene.cycle_model_order();
    }
    '.' => {
      let black = matches!(
        demo.scene.background,
        Some(SceneBackGround::Solid(solid)) if solid.intensity == Vec3::ZERO
      );
      let next = if black {
        SolidBackground::white()
      } else {
        SolidBackground::black()
      };
      log::info!("changing background color");
      demo.scene.set_background(Some(SceneBackGround::Solid(next)));
    }
    _ => {}
  }
}
