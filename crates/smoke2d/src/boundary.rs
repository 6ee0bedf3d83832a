//! Edge conditions for cell-centered fields.
//!
//! The outermost ring of cells is never solved for directly; after every
//! stage that touches a field we rewrite the ring from the interior. Walls
//! are closed: velocity normal to a wall reflects, everything else copies.

/// How a field behaves at the walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain scalar (density, temperature, pressure, divergence): edge cells
    /// copy their interior neighbor.
    Scalar,
    /// X velocity: negated at the left/right walls, copied at top/bottom.
    NormalX,
    /// Y velocity: negated at the top/bottom walls, copied at left/right.
    NormalY,
}

/// Rewrite the boundary ring of `field` from its interior neighbors.
///
/// Corners are the average of their two orthogonal edge neighbors, written
/// after the edges so they see the freshly enforced values.
pub fn enforce(field: &mut [f32], width: usize, height: usize, kind: FieldKind) {
    debug_assert_eq!(field.len(), width * height);
    let at = |x: usize, y: usize| y * width + x;

    // Left and right columns.
    for y in 1..height - 1 {
        let (left, right) = (field[at(1, y)], field[at(width - 2, y)]);
        match kind {
            FieldKind::NormalX => {
                field[at(0, y)] = -left;
                field[at(width - 1, y)] = -right;
            }
            _ => {
                field[at(0, y)] = left;
                field[at(width - 1, y)] = right;
            }
        }
    }

    // Top and bottom rows.
    for x in 1..width - 1 {
        let (top, bottom) = (field[at(x, 1)], field[at(x, height - 2)]);
        match kind {
            FieldKind::NormalY => {
                field[at(x, 0)] = -top;
                field[at(x, height - 1)] = -bottom;
            }
            _ => {
                field[at(x, 0)] = top;
                field[at(x, height - 1)] = bottom;
            }
        }
    }

    // Corners, from the adjacent edge cells.
    field[at(0, 0)] = 0.5 * (field[at(1, 0)] + field[at(0, 1)]);
    field[at(width - 1, 0)] = 0.5 * (field[at(width - 2, 0)] + field[at(width - 1, 1)]);
    field[at(0, height - 1)] = 0.5 * (field[at(1, height - 1)] + field[at(0, height - 2)]);
    field[at(width - 1, height - 1)] =
        0.5 * (field[at(width - 2, height - 1)] + field[at(width - 1, height - 2)]);
}
