//! Side-scrolling shooter simulation.
//!
//! The library owns the whole fixed-step simulation: entities, pools, the
//! stage and spawner, the five weapons, combat resolution and the scenes.
//! Rendering, audio and raw input are reached only through the small traits
//! in [`render`], [`audio`] and [`input`], so any front-end can drive it.

pub mod app;
pub mod audio;
pub mod compute;
pub mod config;
pub mod drops;
pub mod entities;
pub mod error;
pub mod game;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod pool;
pub mod render;
pub mod scene;
pub mod scenes;
pub mod spawner;
pub mod stage;
