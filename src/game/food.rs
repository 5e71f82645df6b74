use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use super::point::Point;

/// Food placement failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    /// Every interior cell is occupied by the snake
    #[error("no free cell left for food placement")]
    GridExhausted,
}

/// Pick a uniformly random free cell in the grid interior.
///
/// Samples both axes from `[-bound, bound - 1]`, one cell narrower than
/// the movement boundary, and resamples until the cell is unoccupied.
/// Deterministic for a seeded `rng`.
pub fn place_food<R: Rng>(
    rng: &mut R,
    bound: i32,
    occupied: &[Point],
) -> Result<Point, PlacementError> {
    let free: HashSet<Point> = interior_cells(bound)
        .filter(|cell| !occupied.contains(cell))
        .collect();
    if free.is_empty() {
        return Err(PlacementError::GridExhausted);
    }

    loop {
        let candidate = Point::new(rng.gen_range(-bound..bound), rng.gen_range(-bound..bound));
        if free.contains(&candidate) {
            return Ok(candidate);
        }
    }
}

fn interior_cells(bound: i32) -> impl Iterator<Item = Point> {
    (-bound..bound).flat_map(move |x| (-bound..bound).map(move |y| Point::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_food_never_on_occupied_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: Vec<Point> = (0..4).map(|y| Point::new(0, y)).collect();

        for _ in 0..1000 {
            let food = place_food(&mut rng, 7, &occupied).unwrap();
            assert!(!occupied.contains(&food));
            assert!((-7..7).contains(&food.x));
            assert!((-7..7).contains(&food.y));
        }
    }

    #[test]
    fn test_placement_is_deterministic_for_a_seed() {
        let occupied = vec![Point::ORIGIN];

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                place_food(&mut a, 7, &occupied),
                place_food(&mut b, 7, &occupied)
            );
        }
    }

    #[test]
    fn test_single_free_cell() {
        // Interior of bound 1 is the 2x2 block with corners (-1,-1)..(0,0);
        // occupy all but one cell.
        let occupied = vec![Point::new(-1, -1), Point::new(-1, 0), Point::new(0, -1)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(place_food(&mut rng, 1, &occupied), Ok(Point::new(0, 0)));
    }

    #[test]
    fn test_grid_exhausted() {
        let occupied = vec![
            Point::new(-1, -1),
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(0, 0),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            place_food(&mut rng, 1, &occupied),
            Err(PlacementError::GridExhausted)
        );
    }
}
