//! Source d'aléa injectable pour la création des particules.
//!
//! En production on s'appuie sur `rand` (`RngSource<ThreadRng>`), en test on fournit une
//! séquence fixe (`SequenceSource`) pour vérifier exactement les champs des particules.

use rand::Rng;

pub trait RandomSource {
    /// Tirage uniforme dans `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Tirage uniforme dans `[min, max)` (`min + u * (max - min)`).
    #[inline]
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_unit() * (max - min)
    }
}

/// Adaptateur autour de n'importe quel générateur `rand`.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl RngSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl Default for RngSource<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.0.random::<f32>()
    }
}

/// Séquence de tirages rejouée en boucle.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Une séquence vide se comporte comme une suite de `0.0`.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}
