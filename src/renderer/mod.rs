//! Canvas 2D rendering module
//!
//! Sprite strips and flat-colored bars drawn with `CanvasRenderingContext2d`.

pub mod canvas;

pub use canvas::{CanvasRenderer, SpriteSheets};
