//! UI-Layer: Pointer-Eingaben, Toolbar und Panel-Zeichnung mit egui.

pub mod input;
pub mod panels;
pub mod toolbar;

pub use input::collect_pointer_intents;
pub use panels::{draw_curve_panel, draw_hodograph_panel};
pub use toolbar::render_toolbar;
