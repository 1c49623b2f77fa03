#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod shape;
pub mod surface;
pub mod tool;
pub mod widgets;

pub use app::PaintApp;
pub use command::Command;
pub use config::AppConfig;
pub use document::Document;
pub use editor::Editor;
pub use error::{ExportError, ExportResult};
pub use input::{InputController, InputEvent, InputHandler};
pub use raster::RasterSurface;
pub use renderer::Renderer;
pub use shape::{BoundingBox, Shape};
pub use surface::RenderSurface;
pub use tool::{Tool, ToolState};
