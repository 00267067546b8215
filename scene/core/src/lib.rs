pub mod scene;
pub use scene::*;

pub mod node;
pub use node::*;

pub mod mesh;
pub use mesh::*;

pub mod material;
pub use material::*;

pub mod background;
pub use background::*;

pub mod light;
pub use light::*;

pub mod camera;
pub use camera::*;

pub mod helpers;
pub use helpers::*;

pub use glam::{Mat4, Vec3, Vec4};
