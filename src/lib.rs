//! TinyCanvas: a small raster pixel editor.
//!
//! The editing core (`canvas`, `ops`, `components`, `editor`, `io`) has no
//! window of its own; `app` wraps it in an eframe front-end.

pub mod logger;

pub mod app;
pub mod canvas;
pub mod cli;
pub mod components;
pub mod editor;
pub mod io;
pub mod ops;
