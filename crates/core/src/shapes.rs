//! Rotation-layout tables for the seven piece families.
//!
//! A layout is the set of occupied cells inside a piece's 4x4 bounding box,
//! stored as `(dx, dy)` offsets from the box's top-left corner. Families
//! carry 1 (O), 2 (I, S, Z) or 4 (L, J, T) layouts; rotation steps
//! cyclically through a family's list.

use blockfall_types::ShapeKind;

/// Offset of a single occupied cell from the bounding-box corner.
pub type CellOffset = (i8, i8);

/// One rotation layout: four occupied cells of the 4x4 box.
pub type Layout = [CellOffset; 4];

const I_LAYOUTS: [Layout; 2] = [
    // Vertical bar in column 1.
    [(1, 0), (1, 1), (1, 2), (1, 3)],
    // Horizontal bar on row 1.
    [(0, 1), (1, 1), (2, 1), (3, 1)],
];

const Z_LAYOUTS: [Layout; 2] = [
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

const S_LAYOUTS: [Layout; 2] = [
    [(2, 1), (3, 1), (1, 2), (2, 2)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const L_LAYOUTS: [Layout; 4] = [
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
];

const J_LAYOUTS: [Layout; 4] = [
    [(1, 0), (2, 0), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (3, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2), (3, 2)],
    [(3, 0), (1, 1), (2, 1), (3, 1)],
];

const T_LAYOUTS: [Layout; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
];

const O_LAYOUTS: [Layout; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

/// All rotation layouts for a family, in rotation order.
pub fn layouts(kind: ShapeKind) -> &'static [Layout] {
    match kind {
        ShapeKind::I => &I_LAYOUTS,
        ShapeKind::Z => &Z_LAYOUTS,
        ShapeKind::S => &S_LAYOUTS,
        ShapeKind::L => &L_LAYOUTS,
        ShapeKind::J => &J_LAYOUTS,
        ShapeKind::T => &T_LAYOUTS,
        ShapeKind::O => &O_LAYOUTS,
    }
}

/// Number of distinct rotation layouts for a family.
pub fn rotation_count(kind: ShapeKind) -> u8 {
    layouts(kind).len() as u8
}

/// Layout for a family at a given rotation index.
///
/// `rotation` must be in `[0, rotation_count(kind))`; the piece type keeps
/// it there by rotating modulo the count.
pub fn layout(kind: ShapeKind, rotation: u8) -> &'static Layout {
    &layouts(kind)[rotation as usize]
}
