//! Hello world of the renderer, one flat colored triangle.

use glim_scene_core::*;

use crate::*;

pub fn build(_ctx: &DemoContext) -> DemoScene {
  let mut scene = Scene::new();
  scene.set_background(Some(SceneBackGround::Solid(SolidBackground::black())));

  let mesh = MeshData {
    positions: vec![
      Vec3::new(-30., -25., 0.),
      Vec3::new(30., -25., 0.),
      Vec3::new(0., 30., 0.),
    ],
    indices: None,
    topology: PrimitiveTopology::TriangleList,
  };
  scene.add_model(SceneModel::new(
    mesh,
    FlatMaterial::new(Vec4::new(1., 0.7, 0., 1.)),
    NodeData::default(),
  ));

  let mut camera = SceneCamera::new(
    CameraEnum::Orthographic(OrthographicCamera::new(100., 100.)),
    NodeData::default(),
  );
  camera.look_at(Vec3::new(0., 0., 100.), Vec3::ZERO);

  DemoScene { scene, camera }
}
