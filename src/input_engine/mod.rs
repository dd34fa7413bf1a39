pub mod input_state;
pub use self::input_state::{Direction, InputState};

pub mod key_bindings;
pub use self::key_bindings::KeyBindings;

pub mod event;
pub use self::event::InputEvent;
