//! A series of semitransparent planes crossing an opaque cube, the classic
//! blending stress scene.

use glim_scene_core::*;

use crate::*;

pub fn build(ctx: &DemoContext) -> DemoScene {
  let mut scene = Scene::new();
  scene.set_background(Some(SceneBackGround::Solid(SolidBackground::black())));

  scene.add_model(SceneModel::new(
    MeshData::cube(14.),
    FlatMaterial::new(Vec4::new(0.8, 0.8, 0.8, 1.)),
    NodeData::default(),
  ));

  let quarter_turn = std::f32::consts::FRAC_PI_2;
  let planes = [
    (Vec4::new(1., 0., 0., 0.3), Mat4::from_rotation_x(quarter_turn)),
    (Vec4::new(0., 1., 0., 0.5), Mat4::from_rotation_y(quarter_turn)),
    (Vec4::new(0., 0., 1., 0.7), Mat4::from_rotation_z(quarter_turn)),
  ];
  for (color, rotation) in planes {
    scene.add_model(SceneModel::new(
      MeshData::plane(50., 50.),
      FlatMaterial::new(color),
      NodeData::with_matrix(rotation),
    ));
  }

  scene.add_light(SceneLight::new(
    LightEnum::Ambient(AmbientLight {
      color_factor: Vec3::ONE,
      intensity: 1.,
    }),
    NodeData::default(),
  ));

  let mut camera = SceneCamera::new(
    CameraEnum::Perspective(PerspectiveCamera::new(70., ctx.aspect())),
    NodeData::default(),
  );
  camera.look_at(Vec3::new(30., 40., 50.), Vec3::ZERO);

  DemoScene { scene, camera }
}

#[cfg(test)]
mod tests {
  use super::*;
  use glim_texture_core::Size;

  #[test]
  fn the_cube_draws_before_the_planes() {
    let ctx = DemoContext::new(
      Size::from_u32_pair_min_one((640, 480)),
      TimeSource::fixed(0.),
    );
    let demo = build(&ctx);
    assert!(!demo.scene.models[0].material.is_transparent());
    assert_eq!(demo.scene.models.len(), 4);
    assert_eq!(demo.scene.lights.len(), 1);
  }
}
