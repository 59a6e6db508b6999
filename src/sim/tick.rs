//! Per-frame motion update

use super::state::World;

/// Advance every square by one frame, in creation order.
///
/// A square flips its horizontal step when its rectangle touches or crosses
/// the left or right canvas edge, or when it currently overlaps any other
/// square. The flip and the move happen in the same update, so two squares
/// detected overlapping this frame reverse first and then move; they can
/// interpenetrate visually for a frame before separating.
///
/// Squares updated earlier in the frame are seen at their new positions by
/// the squares after them, matching in-place group iteration.
pub fn tick(world: &mut World) {
    for i in 0..world.squares.len() {
        let rect = world.squares[i].rect;

        let at_edge = rect.left() <= 0.0 || rect.right() >= world.width;
        let overlapping = world
            .squares
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && rect.intersects(&other.rect));

        let square = &mut world.squares[i];
        if at_edge || overlapping {
            square.step = -square.step;
        }
        square.rect.center.x += square.step;
    }
}
