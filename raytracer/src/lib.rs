#![allow(clippy::many_single_char_names)]

pub mod camera;
pub mod lighting;
pub mod material;
pub mod math;
pub mod object;
pub mod scene;
pub mod skybox;
