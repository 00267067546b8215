//! A cube watched by an orbiting camera. The animation is driven entirely by
//! the injected time source, which is what keeps the screenshot test stable.

use glim_scene_core::*;

use crate::*;

fn orbit_eye(seconds: f32) -> Vec3 {
  let angle = seconds * 0.5;
  Vec3::new(40. * angle.cos(), 25., 40. * angle.sin())
}

pub fn build(ctx: &DemoContext) -> DemoScene {
  let mut scene = Scene::new();
  scene.set_background(Some(SceneBackGround::Solid(SolidBackground {
    intensity: Vec3::splat(0.1),
  })));

  scene.add_model(SceneModel::new(
    MeshData::cube(20.),
    FlatMaterial::new(Vec4::new(1., 0.5, 0., 1.)),
    NodeData::default(),
  ));
  for model in axes_helper(25.) {
    scene.add_model(model);
  }
  scene.add_light(SceneLight::new(
    LightEnum::Directional(DirectionalLight {
      color_factor: Vec3::ONE,
      illuminance: 10_000.,
    }),
    NodeData::at(Vec3::new(0., 100., 0.)),
  ));

  let mut camera = SceneCamera::new(
    CameraEnum::Perspective(PerspectiveCamera::new(70., ctx.aspect())),
    NodeData::default(),
  );
  camera.look_at(orbit_eye(ctx.time.seconds()), Vec3::ZERO);

  DemoScene { scene, camera }
}

pub fn animate(demo: &mut DemoScene, seconds: f32) {
  demo.camera.look_at(orbit_eye(seconds), Vec3::ZERO);
}
