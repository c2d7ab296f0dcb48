//! Cheryl's Cat Adventure: an endless terminal side-scroller.
//!
//! The library holds the whole simulation (world generation, camera,
//! collisions, the per-frame controller) plus the terminal renderer.
//! The binary only wires them to a real terminal and a frame clock.

pub mod camera;
pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod logging;
pub mod sprite;
pub mod worldgen;
