use super::input_state::InputState;
use super::key_bindings::KeyBindings;

/// Événements livrés par les collaborateurs (clavier, fenêtre) entre deux ticks.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    Resize { width: f32, height: f32 },
}

impl InputEvent {
    pub fn key_down(key: impl Into<String>) -> Self {
        InputEvent::KeyDown(key.into())
    }

    pub fn key_up(key: impl Into<String>) -> Self {
        InputEvent::KeyUp(key.into())
    }

    /// Applique un événement clavier à `state`.
    ///
    /// Retourne `true` si l'état a été touché. Les touches inconnues et `Resize`
    /// sont ignorés ici (le redimensionnement est géré par le simulateur).
    pub fn apply_to(&self, state: &mut InputState, bindings: &KeyBindings) -> bool {
        let (key, pressed) = match self {
            InputEvent::KeyDown(key) => (key, true),
            InputEvent::KeyUp(key) => (key, false),
            InputEvent::Resize { .. } => return false,
        };
        match bindings.direction_for(key) {
            Some(direction) => {
                state.set(direction, pressed);
                true
            }
            None => false,
        }
    }
}
