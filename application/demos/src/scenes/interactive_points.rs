//! Point cloud with interactive color cycling. Needs a window and key input,
//! so it opts out of the headless run check via its sidecar.

use glim_scene_core::*;

use crate::*;

const PALETTE: [Vec4; 3] = [
  Vec4::new(0., 1., 1., 1.),
  Vec4::new(1., 0., 1., 1.),
  Vec4::new(1., 1., 0., 1.),
];

pub fn build(_ctx: &DemoContext) -> DemoScene {
  let mut scene = Scene::new();
  scene.set_background(Some(SceneBackGround::Solid(SolidBackground::black())));

  let mut positions = Vec::new();
  for i in 0..500 {
    let angle = i as f32 * 0.1;
    let radius = i as f32 * 0.08;
    positions.push(Vec3::new(
      radius * angle.cos(),
      radius * angle.sin(),
      0.,
    ));
  }
  scene.add_model(SceneModel::new(
    MeshData::point_cloud(positions),
    PointsMaterial { color: PALETTE[0] },
    NodeData::default(),
  ));

  let mut camera = SceneCamera::new(
    CameraEnum::Orthographic(OrthographicCamera::new(100., 100.)),
    NodeData::default(),
  );
  camera.look_at(Vec3::new(0., 0., 100.), Vec3::ZERO);

  DemoScene { scene, camera }
}

/// `c` cycles the point color through the palette.
pub fn on_key(demo: &mut DemoScene, key: char) {
  if key != 'c' {
    return;
  }
  let material = &mut demo.scene.models[0].material;
  let current = material.color();
  let index = PALETTE.iter().position(|c| *c == current).unwrap_or(0);
  let next = PALETTE[(index + 1) % PALETTE.len()];
  log::info!("cycling point color to {next:?}");
  *material = PointsMaterial { color: next }.into();
}
