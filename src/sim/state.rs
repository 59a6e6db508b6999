//! World state and entity types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::spawn::spawn_square;
use crate::consts::*;

/// One drifting square
#[derive(Debug, Clone)]
pub struct Square {
    /// Half-size of the square
    pub radius: f32,
    /// Fill color (sRGB channels plus alpha)
    pub color: [u8; 4],
    /// Bounding rectangle used for rendering and collision
    pub rect: Rect,
    /// Signed horizontal step per frame
    pub step: f32,
}

impl Square {
    /// The square's center position.
    pub fn position(&self) -> Vec2 {
        self.rect.center
    }
}

/// The fixed canvas plus every active square, in creation order.
///
/// Squares are never destroyed once created, only moved.
#[derive(Debug, Clone)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub squares: Vec<Square>,
}

impl World {
    /// Create a world populated with [`SQUARE_COUNT`] randomized squares.
    ///
    /// The same seed reproduces the same starting layout.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut squares: Vec<Square> = Vec::with_capacity(SQUARE_COUNT);
        for _ in 0..SQUARE_COUNT {
            let square = spawn_square(&mut rng, &squares);
            squares.push(square);
        }
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            squares,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn world_spawns_the_full_set() {
        let world = World::new(7);
        assert_eq!(world.squares.len(), SQUARE_COUNT);
        assert_eq!(world.width, CANVAS_WIDTH);
        assert_eq!(world.height, CANVAS_HEIGHT);
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let a = World::new(42);
        let b = World::new(42);
        for (x, y) in a.squares.iter().zip(&b.squares) {
            assert_eq!(x.rect, y.rect);
            assert_eq!(x.color, y.color);
            assert_eq!(x.step, y.step);
        }
    }

    proptest! {
        #[test]
        fn generated_squares_are_in_range(seed in any::<u64>()) {
            let world = World::new(seed);
            prop_assert_eq!(world.squares.len(), SQUARE_COUNT);
            for sq in &world.squares {
                prop_assert!((MIN_RADIUS..=MAX_RADIUS).contains(&sq.radius));
                prop_assert_eq!(sq.color[3], FILL_ALPHA);
                prop_assert!(STEP_CHOICES.contains(&sq.step));
                // Rect half-extents track the radius
                prop_assert_eq!(sq.rect.half, glam::Vec2::splat(sq.radius));
                // Center stays inside the spawn margins
                prop_assert!((SPAWN_X_MIN..=SPAWN_X_MAX).contains(&sq.rect.center.x));
                prop_assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&sq.rect.center.y));
            }
        }
    }
}
