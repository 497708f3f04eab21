pub mod demo;
pub mod render;
