use serde::{Deserialize, Serialize};
use crate::util::PseudoRandom;
use crate::{Color, Position, Snake};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub cols: u16,
    pub rows: u16,
}

impl Grid {
    pub fn new(cols: u16, rows: u16) -> Self {
        Grid { cols, rows }
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as i32) < self.cols as i32 && (p.y as i32) < self.rows as i32
    }

    pub fn cell_count(&self) -> u32 {
        self.cols as u32 * self.rows as u32
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols as i16;
        (0..self.rows as i16).flat_map(move |y| (0..cols).map(move |x| Position::new(x, y)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
    pub color: Color,
    pub points: u32,
}

/// Where new food is allowed to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodSpawnPolicy {
    /// Any cell, even under the snake or on uneaten food.
    #[default]
    Anywhere,
    /// Only cells free of snake and food.
    FreeCells,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub grid: Grid,
    pub foods: Vec<Food>,
    pub background: Color,
    pub food_color: Color,
    pub food_points: u32,
    pub spawn_policy: FoodSpawnPolicy,
}

impl World {
    pub fn new(grid: Grid, background: Color) -> Self {
        World {
            grid,
            foods: Vec::new(),
            background,
            food_color: Color::FOOD,
            food_points: crate::DEFAULT_FOOD_POINTS,
            spawn_policy: FoodSpawnPolicy::default(),
        }
    }

    pub fn reset(&mut self) {
        self.foods.clear();
    }

    /// Place one food item. Returns where it landed, or None if the policy
    /// leaves no cell to put it on.
    pub fn spawn_food(&mut self, rng: &mut PseudoRandom, snake: &Snake) -> Option<Position> {
        let position = match self.spawn_policy {
            FoodSpawnPolicy::Anywhere => Position::new(
                rng.next_below(self.grid.cols as u32) as i16,
                rng.next_below(self.grid.rows as u32) as i16,
            ),
            FoodSpawnPolicy::FreeCells => {
                let free: Vec<Position> = self
                    .grid
                    .cells()
                    .filter(|p| !snake.occupies(*p) && !self.has_food_at(*p))
                    .collect();
                *rng.choose(&free)?
            }
        };

        self.foods.push(Food {
            position,
            color: self.food_color,
            points: self.food_points,
        });
        Some(position)
    }

    pub fn has_food_at(&self, p: Position) -> bool {
        self.foods.iter().any(|f| f.position == p)
    }

    pub fn is_colliding_food(&self, snake: &Snake) -> bool {
        self.has_food_at(snake.head())
    }

    /// Remove the food lying on `p`, if any.
    pub fn take_food_at(&mut self, p: Position) -> Option<Food> {
        let idx = self.foods.iter().position(|f| f.position == p)?;
        Some(self.foods.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    fn world(cols: u16, rows: u16) -> World {
        World::new(Grid::new(cols, rows), Color::BLACK)
    }

    #[test]
    fn spawned_food_is_inside_grid() {
        let mut w = world(7, 4);
        let mut rng = PseudoRandom::new(3);
        let snake = Snake::new(Position::new(0, 0), Direction::Up);
        for _ in 0..100 {
            let p = w.spawn_food(&mut rng, &snake).unwrap();
            assert!(w.grid.contains(p));
        }
        assert_eq!(w.foods.len(), 100);
        assert!(w.foods.iter().all(|f| f.points == 1));
    }

    #[test]
    fn free_cells_policy_avoids_snake() {
        let mut w = world(2, 2);
        w.spawn_policy = FoodSpawnPolicy::FreeCells;
        let snake = Snake::with_body(
            Position::new(0, 0),
            Direction::Right,
            &[Position::new(0, 1), Position::new(1, 1)],
        );
        let mut rng = PseudoRandom::new(11);

        assert_eq!(w.spawn_food(&mut rng, &snake), Some(Position::new(1, 0)));
        // Board is now full
        assert_eq!(w.spawn_food(&mut rng, &snake), None);
        assert_eq!(w.foods.len(), 1);
    }

    #[test]
    fn collision_and_take() {
        let mut w = world(5, 5);
        let snake = Snake::new(Position::new(2, 3), Direction::Up);
        assert!(!w.is_colliding_food(&snake));

        for p in [Position::new(2, 3), Position::new(4, 4)] {
            w.foods.push(Food { position: p, color: Color::FOOD, points: 1 });
        }
        assert!(w.is_colliding_food(&snake));

        let eaten = w.take_food_at(snake.head()).unwrap();
        assert_eq!(eaten.position, Position::new(2, 3));
        assert_eq!(w.foods.len(), 1);
        assert_eq!(w.foods[0].position, Position::new(4, 4));
        assert!(w.take_food_at(Position::new(0, 0)).is_none());
    }

    #[test]
    fn reset_clears_food() {
        let mut w = world(3, 3);
        let snake = Snake::new(Position::new(0, 0), Direction::Up);
        w.spawn_food(&mut PseudoRandom::new(1), &snake);
        w.reset();
        assert!(w.foods.is_empty());
    }

    #[test]
    fn cells_row_major() {
        assert_eq!(Grid::new(3, 4).cell_count(), 12);
        let cells: Vec<_> = Grid::new(2, 2).cells().collect();
        assert_eq!(
            cells,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }
}
