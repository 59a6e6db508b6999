//! Entity factory: randomized squares with collision-free placement

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use super::state::Square;
use crate::consts::*;

/// Create one square with random size, color, and step, placed so its
/// rectangle overlaps none of the existing squares (best effort, see
/// [`place_rect`]).
pub fn spawn_square<R: Rng>(rng: &mut R, existing: &[Square]) -> Square {
    let radius = rng.random_range(MIN_RADIUS..=MAX_RADIUS);
    let color = [
        rng.random::<u8>(),
        rng.random::<u8>(),
        rng.random::<u8>(),
        FILL_ALPHA,
    ];
    let rect = place_rect(rng, radius, existing);
    let step = STEP_CHOICES[rng.random_range(0..STEP_CHOICES.len())];

    Square {
        radius,
        color,
        rect,
        step,
    }
}

/// Sample a rectangle inside the spawn margins that overlaps no existing
/// square's rectangle.
///
/// Gives up after [`PLACEMENT_ATTEMPTS`] rejected candidates and accepts the
/// last one unconditionally, so overlap among the starting squares is
/// possible but rare. That relaxation matches the source behavior this demo
/// reproduces; it is logged rather than treated as an error.
pub fn place_rect<R: Rng>(rng: &mut R, radius: f32, existing: &[Square]) -> Rect {
    let mut candidate = random_rect(rng, radius);
    let mut attempts = 1;

    while existing.iter().any(|sq| candidate.intersects(&sq.rect)) {
        if attempts >= PLACEMENT_ATTEMPTS {
            log::warn!(
                "placement budget exhausted, accepting overlapping rect at {}",
                candidate.center
            );
            break;
        }
        candidate = random_rect(rng, radius);
        attempts += 1;
    }

    candidate
}

fn random_rect<R: Rng>(rng: &mut R, radius: f32) -> Rect {
    let center = Vec2::new(
        rng.random_range(SPAWN_X_MIN..=SPAWN_X_MAX),
        rng.random_range(SPAWN_Y_MIN..=SPAWN_Y_MAX),
    );
    Rect::from_center(center, Vec2::splat(radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn square_at(x: f32, y: f32, radius: f32) -> Square {
        Square {
            radius,
            color: [255, 255, 255, FILL_ALPHA],
            rect: Rect::from_center(Vec2::new(x, y), Vec2::splat(radius)),
            step: 1.0,
        }
    }

    #[test]
    fn placement_avoids_existing_squares() {
        let mut rng = Pcg32::seed_from_u64(1);
        let existing = vec![
            square_at(200.0, 200.0, 50.0),
            square_at(500.0, 300.0, 50.0),
            square_at(800.0, 400.0, 50.0),
        ];

        // Plenty of free canvas, so every placement must come back clear
        for _ in 0..100 {
            let rect = place_rect(&mut rng, MAX_RADIUS, &existing);
            assert!(!existing.iter().any(|sq| rect.intersects(&sq.rect)));
        }
    }

    #[test]
    fn placement_falls_back_when_exhausted() {
        let mut rng = Pcg32::seed_from_u64(2);
        // One square covering the entire spawn region: no candidate can win
        let blocker = Square {
            radius: 600.0,
            color: [0, 0, 0, FILL_ALPHA],
            rect: Rect::from_center(Vec2::new(500.0, 300.0), Vec2::new(600.0, 400.0)),
            step: 1.0,
        };

        let rect = place_rect(&mut rng, 30.0, std::slice::from_ref(&blocker));
        // The fallback accepts an overlapping rect rather than spinning forever
        assert!(rect.intersects(&blocker.rect));
        assert!((SPAWN_X_MIN..=SPAWN_X_MAX).contains(&rect.center.x));
        assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&rect.center.y));
    }

    #[test]
    fn startup_layout_is_pairwise_disjoint() {
        // With 25 squares on a 1000x600 canvas the attempt budget is never
        // hit in practice, so the starting layout must be overlap-free.
        let mut rng = Pcg32::seed_from_u64(3);
        let mut squares: Vec<Square> = Vec::new();
        for _ in 0..SQUARE_COUNT {
            let sq = spawn_square(&mut rng, &squares);
            squares.push(sq);
        }

        for i in 0..squares.len() {
            for j in (i + 1)..squares.len() {
                assert!(
                    !squares[i].rect.intersects(&squares[j].rect),
                    "squares {i} and {j} overlap at startup"
                );
            }
        }
    }
}
