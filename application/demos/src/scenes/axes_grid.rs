//! The debugging helpers, a ground grid plus the world axes.

use glim_scene_core::*;

use crate::*;

pub fn build(ctx: &DemoContext) -> DemoScene {
  let mut scene = Scene::new();
  scene.set_background(Some(SceneBackGround::Solid(SolidBackground {
    intensity: Vec3::splat(0.05),
  })));

  scene.add_model(grid_helper(100., 10, Vec4::new(0.4, 0.4, 0.4, 1.)));
  for model in axes_helper(30.) {
    scene.add_model(model);
  }
  scene.add_light(SceneLight::new(
    LightEnum::Point(PointLight {
      color_factor: Vec3::ONE,
      luminance_intensity: 80.,
      cutoff_distance: 200.,
    }),
    NodeData::at(Vec3::new(20., 30., 20.)),
  ));

  let mut camera = SceneCamera::new(
    CameraEnum::Perspective(PerspectiveCamera::new(60., ctx.aspect())),
    NodeData::default(),
  );
  camera.look_at(Vec3::new(50., 40., 80.), Vec3::ZERO);

  DemoScene { scene, camera }
}
