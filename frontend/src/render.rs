use image::{Rgba, RgbaImage};
use solver::{Maze, Point, Solution};

/// Side length of one cell's square block, in pixels
const CELL_SIZE: u32 = 50;
/// Gap left around each block so the background shows through as a border
const CELL_BORDER: u32 = 2;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WALL: Rgba<u8> = Rgba([30, 30, 30, 255]);
const START: Rgba<u8> = Rgba([0, 200, 80, 255]);
const GOAL: Rgba<u8> = Rgba([180, 0, 0, 255]);
const SOLUTION: Rgba<u8> = Rgba([90, 90, 90, 255]);
const EXPLORED: Rgba<u8> = Rgba([150, 60, 30, 255]);
const EMPTY: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Which parts of the search result get painted on top of the bare maze
#[derive(Copy, Clone, Debug, Default)]
pub struct RenderOptions {
    pub show_solution: bool,
    pub show_explored: bool,
}

/// Paints the maze as one fixed-size block per cell. A cell qualifying for
/// several categories is colored by the first match: wall, start, goal,
/// solution path, explored, empty.
pub fn render(maze: &Maze, solution: Option<&Solution>, options: RenderOptions) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(
        maze.width as u32 * CELL_SIZE,
        maze.height as u32 * CELL_SIZE,
        BACKGROUND,
    );

    for row in 0..maze.height {
        for col in 0..maze.width {
            let point = Point { row, col };

            let fill = if maze.is_wall(point) {
                WALL
            } else if point == maze.start {
                START
            } else if point == maze.goal {
                GOAL
            } else if options.show_solution
                && solution.is_some_and(|s| s.cells.contains(&point))
            {
                SOLUTION
            } else if options.show_explored
                && solution.is_some_and(|s| s.explored.contains(&point))
            {
                EXPLORED
            } else {
                EMPTY
            };

            fill_cell(&mut img, point, fill);
        }
    }

    img
}

fn fill_cell(img: &mut RgbaImage, point: Point, fill: Rgba<u8>) {
    let x0 = point.col as u32 * CELL_SIZE + CELL_BORDER;
    let y0 = point.row as u32 * CELL_SIZE + CELL_BORDER;

    for y in y0..(point.row as u32 + 1) * CELL_SIZE - CELL_BORDER {
        for x in x0..(point.col as u32 + 1) * CELL_SIZE - CELL_BORDER {
            img.put_pixel(x, y, fill);
        }
    }
}
