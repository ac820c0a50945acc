use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{bail, Context};
use log::info;
use solver::{solve, Algorithm, Maze, Point, Solution};

mod render;

use render::{render, RenderOptions};

fn prompt(message: &str) -> Result<String, anyhow::Error> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

/// Prints the ASCII board, marking path cells with a dot
fn print_maze(maze: &Maze, solution: Option<&Solution>) {
    for row in 0..maze.height {
        for col in 0..maze.width {
            let point = Point { row, col };
            let glyph = if maze.is_wall(point) {
                " O "
            } else if point == maze.start {
                " + "
            } else if point == maze.goal {
                " - "
            } else if solution.is_some_and(|s| s.cells.contains(&point)) {
                " . "
            } else {
                "   "
            };
            print!("{}", glyph);
        }
        println!();
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let name = prompt("Enter the name of the maze, without the extension:\n>> ")?;
    let text = fs::read_to_string(format!("{}.txt", name))
        .with_context(|| format!("failed to read maze file {}.txt", name))?;
    let maze: Maze = text.parse().context("malformed maze")?;

    println!("Maze: unsolved");
    println!();
    println!("(+) : starting point\n(-) : ending point");
    println!();
    print_maze(&maze, None);
    println!();

    let mut choice = prompt("Choose an algorithm to try solving the maze with:\n(1)- DFS\n(2)- BFS\n>> ")?;
    let algorithm = loop {
        match choice.parse::<Algorithm>() {
            Ok(algorithm) => break algorithm,
            Err(_) => choice = prompt("invalid response\n>> ")?,
        }
    };

    let out_dir = Path::new(&name);
    if !out_dir.exists() {
        fs::create_dir(out_dir)
            .with_context(|| format!("failed to create output directory {}", name))?;
    }

    render(&maze, None, RenderOptions::default())
        .save(out_dir.join(format!("{}-unsolved.png", name)))?;

    println!();
    println!("Solving...");
    let solution = solve(&maze, algorithm)?;
    info!(
        "{}: {} moves, {} nodes expanded",
        algorithm,
        solution.actions.len(),
        solution.expanded
    );

    println!();
    println!("Maze: solved\nAlgorithm: {}", algorithm);
    println!("Nodes explored: {}", solution.expanded);
    println!();
    print_maze(&maze, Some(&solution));

    render(
        &maze,
        Some(&solution),
        RenderOptions {
            show_solution: true,
            show_explored: false,
        },
    )
    .save(out_dir.join(format!("{}-solved-solution-{}.png", name, algorithm)))?;

    render(
        &maze,
        Some(&solution),
        RenderOptions {
            show_solution: false,
            show_explored: true,
        },
    )
    .save(out_dir.join(format!("{}-solved-explored_nodes-{}.png", name, algorithm)))?;

    let report = serde_json::to_string_pretty(&solution)?;
    fs::write(
        out_dir.join(format!("{}-solution-{}.json", name, algorithm)),
        report,
    )?;

    Ok(())
}
