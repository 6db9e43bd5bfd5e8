//! Bézier-Hodograph-Editor.
//!
//! Interaktiver Editor für Bézier-Kurven: linkes Panel zum Setzen, Ziehen
//! und Entfernen von Kontrollpunkten, rechtes Panel mit dem Hodographen
//! (Differenzvektoren samt eigener Bézier-Kurve).

use bezier_hodograph_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

/// Höhe der Panel-Überschriften in Pixeln.
const LABEL_HEIGHT: f32 = 24.0;
/// Breite der Trennlinie zwischen den Panels.
const DIVIDER_WIDTH: f32 = 1.0;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bezier-Hodograph-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([800.0, 400.0])
                .with_title("Bezier Curve"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier-Hodograph-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.state.options.save_to_file(&EditorOptions::config_path()) {
            log::error!("Optionen konnten nicht gespeichert werden: {:#}", e);
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &self.state));

        // Szene vor der Event-Verarbeitung bauen; Änderungen werden über
        // request_repaint im Folgeframe sichtbar
        let scene = self.controller.build_render_scene(&self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |panel_ui| {
                let full = panel_ui.max_rect();
                let half_width = (full.width() - DIVIDER_WIDTH) / 2.0;

                let curve_label = egui::Rect::from_min_size(
                    full.min,
                    egui::vec2(half_width, LABEL_HEIGHT),
                );
                let hodograph_label = egui::Rect::from_min_size(
                    egui::pos2(full.min.x + half_width + DIVIDER_WIDTH, full.min.y),
                    egui::vec2(half_width, LABEL_HEIGHT),
                );
                let curve_panel = egui::Rect::from_min_max(
                    egui::pos2(full.min.x, full.min.y + LABEL_HEIGHT),
                    egui::pos2(full.min.x + half_width, full.max.y),
                );
                let hodograph_panel = egui::Rect::from_min_max(
                    egui::pos2(full.min.x + half_width + DIVIDER_WIDTH, full.min.y + LABEL_HEIGHT),
                    full.max,
                );

                let response = panel_ui.interact(
                    curve_panel,
                    panel_ui.id().with("curve_panel"),
                    egui::Sense::click_and_drag(),
                );
                events.extend(ui::collect_pointer_intents(&response, curve_panel.min));

                let painter = panel_ui.painter();
                Self::draw_label(painter, curve_label, "Bezier curve");
                Self::draw_label(painter, hodograph_label, "Hodograph");
                painter.vline(
                    full.min.x + half_width,
                    egui::Rangef::new(full.min.y, full.max.y),
                    egui::Stroke::new(DIVIDER_WIDTH, egui::Color32::DARK_GRAY),
                );

                ui::draw_curve_panel(painter, curve_panel, &scene);
                ui::draw_hodograph_panel(painter, hodograph_panel, &scene);
            });

        events
    }

    fn draw_label(painter: &egui::Painter, rect: egui::Rect, text: &str) {
        painter.rect_filled(rect, 0.0, egui::Color32::LIGHT_GRAY);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(14.0),
            egui::Color32::BLACK,
        );
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
