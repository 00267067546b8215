//! WorldObjects useful when debugging a scene or to create reference points
//! within a scene.

use crate::*;

/// One colored line segment per world axis, x red, y green, z blue.
pub fn axes_helper(size: f32) -> Vec<SceneModel> {
  let axis = |dir: Vec3, color: Vec3| {
    SceneModel::new(
      MeshData::line_list(vec![Vec3::ZERO, dir * size]),
      FlatMaterial::new(color.extend(1.)),
      NodeData::default(),
    )
  };
  vec![
    axis(Vec3::X, Vec3::new(1., 0., 0.)),
    axis(Vec3::Y, Vec3::new(0., 1., 0.)),
    axis(Vec3::Z, Vec3::new(0., 0., 1.)),
  ]
}

/// A square line grid in the xz plane centered at the origin.
pub fn grid_helper(size: f32, divisions: u32, color: Vec4) -> SceneModel {
  let half = size / 2.;
  let step = size / divisions as f32;
  let mut positions = Vec::new();
  for i in 0..=divisions {
    let offset = -half + i as f32 * step;
    positions.push(Vec3::new(offset, 0., -half));
    positions.push(Vec3::new(offset, 0., half));
    positions.push(Vec3::new(-half, 0., offset));
    positions.push(Vec3::new(half, 0., offset));
  }
  SceneModel::new(
    MeshData::line_list(positions),
    FlatMaterial::new(color),
    NodeData::default(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn axes_are_three_colored_segments() {
    let axes = axes_helper(10.);
    assert_eq!(axes.len(), 3);
    for model in &axes {
      assert_eq!(model.mesh.positions.len(), 2);
      assert_eq!(model.mesh.topology, PrimitiveTopology::LineList);
    }
  }

  #[test]
  fn grid_line_count_matches_divisions() {
    let grid = grid_helper(10., 10, Vec4::new(0.5, 0.5, 0.5, 1.));
    // 11 lines in each direction, 2 endpoints each
    assert_eq!(grid.mesh.positions.len(), 44);
  }
}
