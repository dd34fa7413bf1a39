use rocket_smoke_sim::input_engine::{Direction, InputEvent, InputState, KeyBindings};

// ==================================
// 1. InputState
// ==================================

#[test]
fn test_default_state_is_idle() {
    let state = InputState::default();
    assert!(!state.is_moving());
    for d in Direction::ALL {
        assert!(!state.is_pressed(d));
    }
}

#[test]
fn test_press_release_each_direction() {
    let mut state = InputState::default();
    for d in Direction::ALL {
        state.press(d);
        assert!(state.is_pressed(d));
        assert!(state.is_moving());
        state.release(d);
        assert!(!state.is_pressed(d));
        assert!(!state.is_moving());
    }
}

#[test]
fn test_with_and_clear() {
    let mut state = InputState::with(&[Direction::Up, Direction::Right]);
    assert!(state.up && state.right);
    assert!(!state.down && !state.left);
    state.clear();
    assert_eq!(state, InputState::default());
}

// ==================================
// 2. KeyBindings
// ==================================

#[test]
fn test_default_bindings_are_wasd_case_insensitive() {
    let bindings = KeyBindings::default();
    assert_eq!(bindings.len(), 4);
    assert_eq!(bindings.direction_for("w"), Some(Direction::Up));
    assert_eq!(bindings.direction_for("W"), Some(Direction::Up));
    assert_eq!(bindings.direction_for("a"), Some(Direction::Left));
    assert_eq!(bindings.direction_for("S"), Some(Direction::Down));
    assert_eq!(bindings.direction_for("d"), Some(Direction::Right));
    assert_eq!(bindings.direction_for("x"), None);
}

#[test]
fn test_bind_and_unbind() {
    let mut bindings = KeyBindings::empty();
    assert!(bindings.is_empty());

    bindings.bind("ArrowUp", Direction::Up);
    assert_eq!(bindings.direction_for("arrowup"), Some(Direction::Up));

    bindings.bind("ARROWUP", Direction::Down);
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings.direction_for("ArrowUp"), Some(Direction::Down));

    assert_eq!(bindings.unbind("arrowUp"), Some(Direction::Down));
    assert!(bindings.is_empty());
}

#[test]
fn test_bindings_from_toml() {
    let bindings = KeyBindings::from_toml_str(
        r#"
        Z = "up"
        q = "left"
        s = "down"
        d = "right"
        "#,
    )
    .unwrap();

    assert_eq!(bindings.direction_for("z"), Some(Direction::Up));
    assert_eq!(bindings.direction_for("Q"), Some(Direction::Left));
    assert_eq!(bindings.direction_for("w"), None);
}

#[test]
fn test_bindings_from_toml_rejects_unknown_direction() {
    assert!(KeyBindings::from_toml_str(r#"w = "forward""#).is_err());
}

#[test]
fn test_bindings_from_missing_file_is_err() {
    assert!(KeyBindings::from_file("does/not/exist.toml").is_err());
}

// ==================================
// 3. InputEvent
// ==================================

#[test]
fn test_key_events_update_state() {
    let bindings = KeyBindings::default();
    let mut state = InputState::default();

    assert!(InputEvent::key_down("D").apply_to(&mut state, &bindings));
    assert!(state.right);
    assert!(InputEvent::key_down("w").apply_to(&mut state, &bindings));
    assert!(state.up && state.right);

    assert!(InputEvent::key_up("d").apply_to(&mut state, &bindings));
    assert!(!state.right);
    assert!(state.up);

    // relâcher une touche déjà relâchée ne pose pas de problème
    assert!(InputEvent::key_up("d").apply_to(&mut state, &bindings));
    assert!(!state.right);
}

#[test]
fn test_unknown_key_and_resize_are_ignored() {
    let bindings = KeyBindings::default();
    let mut state = InputState::default();

    assert!(!InputEvent::key_down("Escape").apply_to(&mut state, &bindings));
    assert!(!InputEvent::Resize {
        width: 10.0,
        height: 10.0
    }
    .apply_to(&mut state, &bindings));
    assert_eq!(state, InputState::default());
}
