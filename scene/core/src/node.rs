use crate::*;

/// Per object transform state. The scene here is a flat list of objects, each
/// node matrix is directly the world matrix; hierarchy resolution is owned by
/// whatever feeds the scene.
#[derive(Debug, Clone, Copy)]
pub struct NodeData {
  pub local_matrix: Mat4,
  pub visible: bool,
}

impl Default for NodeData {
  fn default() -> Self {
    Self {
      local_matrix: Mat4::IDENTITY,
      visible: true,
    }
  }
}

impl NodeData {
  pub fn at(position: Vec3) -> Self {
    Self {
      local_matrix: Mat4::from_translation(position),
      ..Default::default()
    }
  }

  pub fn with_matrix(local_matrix: Mat4) -> Self {
    Self {
      local_matrix,
      ..Default::default()
    }
  }

  pub fn position(&self) -> Vec3 {
    self.local_matrix.w_axis.truncate()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn node_position_tracks_translation() {
    let node = NodeData::at(Vec3::new(1., 2., 3.));
    assert_eq!(node.position(), Vec3::new(1., 2., 3.));
    assert!(node.visible);
  }
}
