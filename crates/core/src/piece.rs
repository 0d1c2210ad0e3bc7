//! The active piece: a value record of family, rotation, color and position.

use blockfall_types::{ShapeKind, COLOR_COUNT, SPAWN_X, SPAWN_Y};

use crate::rng::SimpleRng;
use crate::shapes::{layout, rotation_count, Layout};

/// A tetromino instance.
///
/// `(x, y)` is the grid position of the piece's 4x4 bounding-box top-left
/// corner. `color` is fixed at creation and only matters for rendering;
/// it is what gets written into the grid when the piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: u8,
    pub color: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Draw a piece with uniform random family and color at the given origin.
    pub fn random(rng: &mut SimpleRng, x: i8, y: i8) -> Self {
        let kind = ShapeKind::ALL[rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color = 1 + rng.next_range(COLOR_COUNT as u32) as u8;
        Self {
            kind,
            rotation: 0,
            color,
            x,
            y,
        }
    }

    /// Draw a random piece at the spawn origin.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        Self::random(rng, SPAWN_X, SPAWN_Y)
    }

    /// Occupied cells of the current rotation, as offsets within the 4x4 box.
    pub fn cells(&self) -> &'static Layout {
        layout(self.kind, self.rotation)
    }

    /// Advance to the next rotation layout, cyclically.
    ///
    /// Unconditional: legality of the resulting position is the engine's
    /// concern, and this rule set never rejects a rotation.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % rotation_count(self.kind);
    }
}
