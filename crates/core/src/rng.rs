//! RNG module - piece selection
//!
//! The engine never reaches for ambient global randomness. It draws kinds from
//! a [`PieceSource`], so tests can plug in a fixed sequence while the game uses
//! a uniform choice over the seven kinds.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use crate::types::PieceKind;

/// Supplies the kind of each newly spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG are weak; use the high half.
        ((self.next_u32() >> 16) * max) >> 16
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform choice among the seven kinds, independent draw every spawn
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Cycles through a fixed list of kinds
///
/// ```
/// use term_tetris_core::{PieceSource, SequenceSource};
/// use term_tetris_types::PieceKind;
///
/// let mut src = SequenceSource::new(vec![PieceKind::I, PieceKind::O]);
/// assert_eq!(src.next_kind(), PieceKind::I);
/// assert_eq!(src.next_kind(), PieceKind::O);
/// assert_eq!(src.next_kind(), PieceKind::I);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl SequenceSource {
    /// An empty list falls back to always yielding `I`.
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        Self { kinds, pos: 0 }
    }

    /// Always the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::I;
        }
        let kind = self.kinds[self.pos % self.kinds.len()];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}
