/// Les quatre directions suivies par la simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Snapshot de l'état des touches directionnelles.
///
/// Mis à jour par le collaborateur clavier entre deux ticks, lu (jamais modifié)
/// par le moteur physique.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn is_moving(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, pressed: bool) {
        let slot = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *slot = pressed;
    }

    pub fn press(&mut self, direction: Direction) {
        self.set(direction, true);
    }

    pub fn release(&mut self, direction: Direction) {
        self.set(direction, false);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Construit un état à partir d'une liste de directions pressées.
    pub fn with(directions: &[Direction]) -> Self {
        let mut state = Self::default();
        for &d in directions {
            state.press(d);
        }
        state
    }
}
