pub mod axes_grid;
pub mod blend_dither;
pub mod interactive_points;
pub mod orbit_cube;
pub mod points1;
pub mod transparency1;
pub mod triangle;
