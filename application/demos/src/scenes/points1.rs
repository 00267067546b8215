//! Point cloud rendering with the point list topology.

use glim_scene_core::*;

use crate::*;

pub fn build(_ctx: &DemoContext) -> DemoScene {
  let mut scene = Scene::new();
  scene.set_background(Some(SceneBackGround::Solid(SolidBackground::black())));

  let mut positions = Vec::new();
  for ix in 0..11 {
    for iy in 0..11 {
      positions.push(Vec3::new(ix as f32 * 8. - 40., iy as f32 * 8. - 40., 0.));
    }
  }
  scene.add_model(SceneModel::new(
    MeshData::point_cloud(positions),
    PointsMaterial {
      color: Vec4::new(0., 1., 1., 1.),
    },
    NodeData::default(),
  ));

  let mut camera = SceneCamera::new(
    CameraEnum::Orthographic(OrthographicCamera::new(100., 100.)),
    NodeData::default(),
  );
  camera.look_at(Vec3::new(0., 0., 100.), Vec3::ZERO);

  DemoScene { scene, camera }
}
