pub use glam::Vec2;

// ------------------------
// Canvas
// ------------------------
/// Dimensions de la surface de rendu (en pixels monde).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ramène une position dans `[0, width] × [0, height]`.
    ///
    /// Pas de `f32::clamp` ici : un canvas dégénéré (taille négative) ferait paniquer `clamp`.
    #[inline]
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.max(0.0).min(self.width),
            pos.y.max(0.0).min(self.height),
        )
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

// ------------------------
// UpdateResult
// ------------------------
/// Bilan d'un tick de simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Au moins une direction était pressée pendant ce tick
    pub moving: bool,
    /// Particules de fumée créées pendant ce tick
    pub spawned: usize,
    /// Particules retirées (opacité ≤ 0) pendant ce tick
    pub expired: usize,
    /// Particules encore vivantes après le tick
    pub alive: usize,
}
