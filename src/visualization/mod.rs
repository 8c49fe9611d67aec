pub mod canvas;
pub mod atoms_vis2d;
