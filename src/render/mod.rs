//! Rendering: surface abstraction and the scene draw pass
//!
//! The draw pass targets the `RenderSurface` trait; backends are the
//! Canvas2D context on wasm and a recording display list everywhere
//! (tests, headless runs).

pub mod draw;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use draw::{render, tick};
pub use surface::{DrawCmd, RecordingSurface, RenderSurface};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
