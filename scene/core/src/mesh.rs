use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
  TriangleList,
  LineList,
  PointList,
}

/// Cpu side mesh payload. Positions only, the flat materials carry the color.
#[derive(Debug, Clone)]
pub struct MeshData {
  pub positions: Vec<Vec3>,
  pub indices: Option<Vec<u32>>,
  pub topology: PrimitiveTopology,
}

impl MeshData {
  pub fn draw_count(&self) -> usize {
    self
      .indices
      .as_ref()
      .map(|i| i.len())
      .unwrap_or(self.positions.len())
  }

  /// An xy aligned quad centered at the origin.
  pub fn plane(width: f32, height: f32) -> Self {
    let w = width / 2.;
    let h = height / 2.;
    Self {
      positions: vec![
        Vec3::new(-w, -h, 0.),
        Vec3::new(w, -h, 0.),
        Vec3::new(w, h, 0.),
        Vec3::new(-w, h, 0.),
      ],
      indices: Some(vec![0, 1, 2, 0, 2, 3]),
      topology: PrimitiveTopology::TriangleList,
    }
  }

  pub fn cube(size: f32) -> Self {
    let s = size / 2.;
    let positions = vec![
      Vec3::new(-s, -s, -s),
      Vec3::new(s, -s, -s),
      Vec3::new(s, s, -s),
      Vec3::new(-s, s, -s),
      Vec3::new(-s, -s, s),
      Vec3::new(s, -s, s),
      Vec3::new(s, s, s),
      Vec3::new(-s, s, s),
    ];
    #[rustfmt::skip]
    let indices = vec![
      0, 2, 1, 0, 3, 2, // back
      4, 5, 6, 4, 6, 7, // front
      0, 1, 5, 0, 5, 4, // bottom
      3, 6, 2, 3, 7, 6, // top
      0, 4, 7, 0, 7, 3, // left
      1, 2, 6, 1, 6, 5, // right
    ];
    Self {
      positions,
      indices: Some(indices),
      topology: PrimitiveTopology::TriangleList,
    }
  }

  /// Point pairs, every two positions make one segment.
  pub fn line_list(positions: Vec<Vec3>) -> Self {
    Self {
      positions,
      indices: None,
      topology: PrimitiveTopology::LineList,
    }
  }

  pub fn point_cloud(positions: Vec<Vec3>) -> Self {
    Self {
      positions,
      indices: None,
      topology: PrimitiveTopology::PointList,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plane_is_two_triangles() {
    let plane = MeshData::plane(50., 50.);
    assert_eq!(plane.positions.len(), 4);
    assert_eq!(plane.draw_count(), 6);
    assert_eq!(plane.topology, PrimitiveTopology::TriangleList);
  }

  #[test]
  fn cube_has_twelve_triangles() {
    let cube = MeshData::cube(2.);
    assert_eq!(cube.positions.len(), 8);
    assert_eq!(cube.draw_count(), 36);
  }

  #[test]
  fn point_cloud_draws_every_position() {
    let cloud = MeshData::point_cloud(vec![Vec3::ZERO; 9]);
    assert_eq!(cloud.draw_count(), 9);
    assert_eq!(cloud.topology, PrimitiveTopology::PointList);
  }
}
