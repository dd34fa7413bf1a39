use std::collections::HashMap;

use log::info;

use super::input_state::Direction;

/// Association touche → direction, insensible à la casse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<String, Direction>,
}

impl Default for KeyBindings {
    /// Disposition WASD
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind("w", Direction::Up);
        bindings.bind("s", Direction::Down);
        bindings.bind("a", Direction::Left);
        bindings.bind("d", Direction::Right);
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Associe `key` à `direction` (remplace une association existante).
    pub fn bind(&mut self, key: &str, direction: Direction) {
        self.bindings.insert(key.to_lowercase(), direction);
    }

    pub fn unbind(&mut self, key: &str) -> Option<Direction> {
        self.bindings.remove(&key.to_lowercase())
    }

    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        self.bindings.get(&key.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Lit une table TOML `touche = "direction"`, par exemple :
    ///
    /// ```toml
    /// z = "up"
    /// q = "left"
    /// ```
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let raw: HashMap<String, Direction> = toml::from_str(text)?;
        let mut bindings = Self::empty();
        for (key, direction) in raw {
            bindings.bind(&key, direction);
        }
        Ok(bindings)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let bindings = Self::from_toml_str(&text)?;
        info!("⌨️ {} key binding(s) loaded from {}", bindings.len(), path);
        Ok(bindings)
    }
}
