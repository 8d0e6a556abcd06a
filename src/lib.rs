pub mod cell;
pub mod color;
pub mod config;
pub mod grid;
pub mod inject;
pub mod pattern;
pub mod world;
