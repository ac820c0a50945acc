use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// A single cell position in the maze, 0-indexed from the top-left corner
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The fixed order in which neighbors are expanded
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The point reached by taking one step from `from`, or `None` if the
    /// step would leave the grid through the top or left edge
    pub fn step(self, from: Point) -> Option<Point> {
        let Point { row, col } = from;
        let point = match self {
            Direction::Up => Point {
                row: row.checked_sub(1)?,
                col,
            },
            Direction::Down => Point { row: row + 1, col },
            Direction::Left => Point {
                row,
                col: col.checked_sub(1)?,
            },
            Direction::Right => Point { row, col: col + 1 },
        };
        Some(point)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Down => "down",
                Direction::Left => "left",
                Direction::Right => "right",
            }
        )
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(anyhow::anyhow!("Invalid direction: {}", s)),
        }
    }
}

/// A rectangular maze parsed from text: a wall mask plus the two marked cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    pub height: usize,
    pub width: usize,
    pub walls: Vec<Vec<bool>>,
    pub start: Point,
    pub goal: Point,
}

impl Maze {
    /// Whether the cell is impassable. Out-of-bounds positions count as
    /// walls, since source rows may be shorter than the declared width.
    pub fn is_wall(&self, point: Point) -> bool {
        point.row >= self.height || point.col >= self.width || self.walls[point.row][point.col]
    }

    /// Returns the in-bounds, non-wall neighbors of `node` together with the
    /// move that reaches them, in the fixed up/down/left/right order.
    pub fn neighbors_of(&self, node: Point) -> impl Iterator<Item = (Direction, Point)> {
        let mut moves = Vec::with_capacity(4);

        for direction in Direction::ALL {
            if let Some(next) = direction.step(node) {
                // bounds are tested against the neighbor itself; the top and
                // left edges are already handled by `step`
                if !self.is_wall(next) {
                    moves.push((direction, next));
                }
            }
        }

        moves.into_iter()
    }
}

impl FromStr for Maze {
    type Err = anyhow::Error;

    /// Parses the text maze format: one line per row, space = passable,
    /// `A` = start, `B` = goal, any other character = wall. Rows shorter
    /// than the widest row are padded with passable cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // marker counts are validated before any rows are built
        if s.matches('A').count() != 1 {
            return Err(anyhow::anyhow!(
                "the maze must have exactly one starting point 'A'"
            ));
        }
        if s.matches('B').count() != 1 {
            return Err(anyhow::anyhow!(
                "the maze must have exactly one ending point 'B'"
            ));
        }

        let height = s.lines().count();
        let width = s.lines().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut walls = Vec::with_capacity(height);
        let mut start = None;
        let mut goal = None;

        for (row, line) in s.lines().enumerate() {
            let mut mask = vec![false; width];
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'A' => start = Some(Point { row, col }),
                    'B' => goal = Some(Point { row, col }),
                    ' ' => {}
                    _ => mask[col] = true,
                }
            }
            walls.push(mask);
        }

        // both markers exist, the counts above guarantee it
        let start = start.ok_or_else(|| anyhow::anyhow!("starting point not found"))?;
        let goal = goal.ok_or_else(|| anyhow::anyhow!("ending point not found"))?;

        Ok(Maze {
            height,
            width,
            walls,
            start,
            goal,
        })
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.walls.iter().enumerate() {
            for (col, &wall) in cells.iter().enumerate() {
                let point = Point { row, col };
                let glyph = if wall {
                    " O "
                } else if point == self.start {
                    " + "
                } else if point == self.goal {
                    " - "
                } else {
                    "   "
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
