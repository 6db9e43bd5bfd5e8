//! Bézier-Hodograph-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, PointerButton, PointerSession,
};
pub use core::{bezier, derivative, hit_test, ControlPointStore};
pub use shared::{EditorOptions, RenderScene};
