//! Freehand drawing core: stroke capture, stroke history, and style pickers.
//!
//! This crate turns a stream of drag-gesture events into styled strokes and
//! keeps them in an undo/redo history. It is compiled to WebAssembly for the
//! browser host, but everything except [`engine::Engine`] and [`render`] is
//! plain Rust and can be exercised without a browser. The host layer is
//! responsible only for wiring pointer/touch events and picker buttons to the
//! engine and reacting to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`capture`] | Idle/Drawing gesture state machine that builds strokes |
//! | [`history`] | Committed/undone stroke stacks and change listeners |
//! | [`stroke`] | The stroke entity |
//! | [`style`] | Stroke effects and the style snapshot |
//! | [`color`] | Color parsing into RGBA |
//! | [`picker`] | Option pickers, style options, and the options panel |
//! | [`config`] | Option sets and defaults, loadable from JSON |
//! | [`paint`] | Stroke to paint-layer mapping (glow, dash, width scale) |
//! | [`geom`] | Points and the canvas offset |
//! | [`render`] | Canvas2D drawing of paint layers |
//! | [`consts`] | Palette, option sets, and paint factors |

pub mod capture;
pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod history;
pub mod paint;
pub mod picker;
pub mod render;
pub mod stroke;
pub mod style;
