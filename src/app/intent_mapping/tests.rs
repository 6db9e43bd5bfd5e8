use glam::Vec2;

use super::map_intent_to_commands;
use crate::app::{AppCommand, AppIntent, AppState, PointerButton};

fn state_with_points(points: &[Vec2]) -> AppState {
    let mut state = AppState::new();
    for &point in points {
        state.store.add(point);
    }
    state
}

#[test]
fn primary_press_on_existing_point_maps_to_begin_drag() {
    let state = state_with_points(&[Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0)]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            button: PointerButton::Primary,
            pos: Vec2::new(12.0, 11.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::BeginDrag { index: 0 }));
}

#[test]
fn primary_press_on_empty_space_maps_to_begin_empty_press() {
    let state = state_with_points(&[Vec2::new(10.0, 10.0)]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            button: PointerButton::Primary,
            pos: Vec2::new(200.0, 200.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::BeginEmptyPress));
}

#[test]
fn primary_click_without_point_hit_maps_to_add_point() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerClicked {
            button: PointerButton::Primary,
            pos: Vec2::new(42.0, 7.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::AddPoint { .. }));
}

#[test]
fn primary_click_after_press_on_existing_point_is_suppressed() {
    let mut state = state_with_points(&[Vec2::new(10.0, 10.0)]);
    state.session.pressed_on_existing = true;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerClicked {
            button: PointerButton::Primary,
            pos: Vec2::new(10.0, 10.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn secondary_click_on_point_maps_to_remove_point() {
    let state = state_with_points(&[Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0)]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerClicked {
            button: PointerButton::Secondary,
            pos: Vec2::new(98.0, 103.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RemovePoint { index: 1 }));
}

#[test]
fn secondary_click_on_empty_space_maps_to_nothing() {
    let state = state_with_points(&[Vec2::new(10.0, 10.0)]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerClicked {
            button: PointerButton::Secondary,
            pos: Vec2::new(300.0, 300.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn drag_without_active_session_maps_to_nothing() {
    let state = state_with_points(&[Vec2::new(10.0, 10.0)]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged {
            pos: Vec2::new(50.0, 50.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn drag_with_active_session_maps_to_move_point() {
    let mut state = state_with_points(&[Vec2::new(10.0, 10.0)]);
    state.session.dragged_index = Some(0);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged {
            pos: Vec2::new(50.0, 50.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::MovePoint { index: 0, .. }));
}

#[test]
fn primary_release_while_dragging_maps_to_end_drag() {
    let mut state = state_with_points(&[Vec2::new(10.0, 10.0)]);
    state.session.dragged_index = Some(0);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            button: PointerButton::Primary,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::EndDrag));
}

#[test]
fn primary_release_while_idle_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            button: PointerButton::Primary,
        },
    );

    assert!(commands.is_empty());
}
