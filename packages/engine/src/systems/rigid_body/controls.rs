use serde::{Deserialize, Serialize};

use super::vec2::Point;

/// Movement directions, in the order the speed and pressed arrays use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    /// Unit step in screen coordinates (y grows downward)
    fn unit(self) -> Point {
        match self {
            Direction::Up => Point::new(0.0, -1.0),
            Direction::Left => Point::new(-1.0, 0.0),
            Direction::Down => Point::new(0.0, 1.0),
            Direction::Right => Point::new(1.0, 0.0),
        }
    }
}

/// Pressed-control flags written by the input collaborator, with the
/// per-direction speed applied while a flag is held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Controls {
    pub pressed: [bool; 4],
    pub speed: [f64; 4],
}

impl Default for Controls {
    fn default() -> Self {
        Self { pressed: [false; 4], speed: [1.0; 4] }
    }
}

impl Controls {
    pub fn with_speed(speed: [f64; 4]) -> Self {
        Self { speed, ..Self::default() }
    }

    pub fn set_pressed(&mut self, dir: Direction, pressed: bool) {
        self.pressed[dir as usize] = pressed;
    }

    pub fn is_pressed(&self, dir: Direction) -> bool {
        self.pressed[dir as usize]
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; 4];
    }

    /// Displacement for one frame from the held directions.
    pub fn displacement(&self) -> Point {
        Direction::ALL
            .iter()
            .filter(|d| self.pressed[**d as usize])
            .fold(Point::zero(), |acc, &d| acc + d.unit() * self.speed[d as usize])
    }
}
