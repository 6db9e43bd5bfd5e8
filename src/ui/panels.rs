//! Zeichnet Kurven- und Hodograph-Panel aus der RenderScene.

use crate::shared::RenderScene;
use glam::Vec2;

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe um.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

fn polyline(
    painter: &egui::Painter,
    points: impl Iterator<Item = egui::Pos2>,
    stroke: egui::Stroke,
) {
    let points: Vec<egui::Pos2> = points.collect();
    if points.len() > 1 {
        painter.add(egui::Shape::line(points, stroke));
    }
}

/// Zeichnet das interaktive Kurven-Panel: Kontrollpolygon, Kurve, Punkte.
pub fn draw_curve_panel(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let painter = painter.with_clip_rect(rect);
    let options = &scene.options;
    let to_screen = |p: Vec2| egui::pos2(rect.min.x + p.x, rect.min.y + p.y);
    let stroke = |color: [f32; 4]| egui::Stroke::new(options.stroke_width, color32(color));

    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(240));

    polyline(
        &painter,
        scene.control_points.iter().map(|&p| to_screen(p)),
        stroke(options.control_polygon_color),
    );

    polyline(
        &painter,
        scene.curve.iter().map(|&p| to_screen(p)),
        stroke(options.curve_color),
    );

    // Selektierter Punkt wird größer und rot über dem Marker gezeichnet
    for (index, &point) in scene.control_points.iter().enumerate() {
        painter.circle_filled(
            to_screen(point),
            options.point_radius_px,
            color32(options.point_color),
        );
        if scene.selected_index == Some(index) {
            painter.circle_filled(
                to_screen(point),
                options.point_radius_selected_px,
                color32(options.point_color_selected),
            );
        }
    }
}

/// Zeichnet das Hodograph-Panel: Vektormarker, Vektorzug, Hodograph-Kurve.
///
/// Die Vektoren werden zur Anzeige um die Panel-Mitte versetzt — ein
/// reines Darstellungs-Offset, die Daten bleiben unverändert.
pub fn draw_hodograph_panel(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let painter = painter.with_clip_rect(rect);
    let options = &scene.options;
    let center = rect.center();
    let to_screen = |p: Vec2| egui::pos2(center.x + p.x, center.y + p.y);
    let stroke = |color: [f32; 4]| egui::Stroke::new(options.stroke_width, color32(color));

    painter.rect_filled(rect, 0.0, color32(options.hodograph_background_color));

    polyline(
        &painter,
        scene.hodograph.iter().map(|&p| to_screen(p)),
        stroke(options.hodograph_vector_color),
    );

    polyline(
        &painter,
        scene.hodograph_curve.iter().map(|&p| to_screen(p)),
        stroke(options.hodograph_curve_color),
    );

    for &vector in &scene.hodograph {
        painter.circle_filled(
            to_screen(vector),
            options.point_radius_px,
            color32(options.hodograph_point_color),
        );
    }
}
