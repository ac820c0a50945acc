use std::{
    collections::{HashSet, VecDeque},
    fmt::Display,
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::grid::{Direction, Maze, Point};

/// The two supported traversal orders
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Algorithm {
    /// Depth-first: the frontier behaves as a LIFO stack
    Dfs,
    /// Breadth-first: the frontier behaves as a FIFO queue, so the first
    /// solution found has the minimum number of moves
    Bfs,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Algorithm::Dfs => "DFS",
                Algorithm::Bfs => "BFS",
            }
        )
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "dfs" | "DFS" => Ok(Algorithm::Dfs),
            "2" | "bfs" | "BFS" => Ok(Algorithm::Bfs),
            _ => Err(anyhow::anyhow!("Invalid algorithm: {}", s)),
        }
    }
}

/// Terminal outcomes of a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The frontier emptied before the goal was reached; the maze was
    /// exhaustively explored and has no path from start to goal
    NoSolution,
    /// A node was removed from an empty frontier. The solve loop checks for
    /// emptiness before every removal, so seeing this means the loop's
    /// invariant was broken
    EmptyFrontier,
}

impl Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::NoSolution => write!(f, "the maze has no solution"),
            SolveError::EmptyFrontier => write!(f, "removed a node from an empty frontier"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Index of a node in the solve's arena
type NodeId = usize;

/// One step of the search tree: a position plus the move and parent node
/// that produced it. The root has neither.
#[derive(Debug, Clone, Copy)]
struct Node {
    state: Point,
    parent: Option<NodeId>,
    action: Option<Direction>,
}

/// The set of nodes awaiting expansion, in stack or queue order. Duplicate
/// suppression is the solve loop's job, not the frontier's.
struct Frontier {
    order: Algorithm,
    items: VecDeque<NodeId>,
}

impl Frontier {
    fn new(order: Algorithm) -> Self {
        Self {
            order,
            items: VecDeque::new(),
        }
    }

    fn add(&mut self, id: NodeId) {
        self.items.push_back(id);
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether some held node has the given state
    fn contains_state(&self, nodes: &[Node], state: Point) -> bool {
        self.items.iter().any(|&id| nodes[id].state == state)
    }

    /// Removes one node per the traversal order: the most recently added
    /// for [`Algorithm::Dfs`], the least recently added for
    /// [`Algorithm::Bfs`]
    fn remove(&mut self) -> Result<NodeId, SolveError> {
        let id = match self.order {
            Algorithm::Dfs => self.items.pop_back(),
            Algorithm::Bfs => self.items.pop_front(),
        };
        id.ok_or(SolveError::EmptyFrontier)
    }
}

/// A successful solve: the moves and cells from start (exclusive) to goal
/// (inclusive), plus what the search did to find them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub algorithm: Algorithm,
    pub actions: Vec<Direction>,
    pub cells: Vec<Point>,
    /// Number of nodes removed from the frontier and goal-tested
    pub expanded: usize,
    /// States expanded before the goal was found, for visualization
    pub explored: HashSet<Point>,
}

/// Searches the maze for a path from `maze.start` to `maze.goal` using the
/// selected traversal order.
///
/// Each reachable state enters the frontier at most once, so the search
/// terminates on any finite grid; an unreachable goal yields
/// [`SolveError::NoSolution`].
pub fn solve(maze: &Maze, algorithm: Algorithm) -> Result<Solution, SolveError> {
    // arena of every node created during this solve; parents are indices
    let mut nodes = vec![Node {
        state: maze.start,
        parent: None,
        action: None,
    }];

    let mut frontier = Frontier::new(algorithm);
    frontier.add(0);

    let mut explored: HashSet<Point> = HashSet::new();
    let mut expanded = 0;

    loop {
        if frontier.is_empty() {
            return Err(SolveError::NoSolution);
        }

        let id = frontier.remove()?;
        expanded += 1;
        let node = nodes[id];

        if node.state == maze.goal {
            debug!("{}: goal reached after {} expansions", algorithm, expanded);

            // walk the parent chain back to the root, then flip into
            // start-to-goal order; the root contributes no action
            let mut actions = Vec::new();
            let mut cells = Vec::new();
            let mut current = node;
            while let Some(parent) = current.parent {
                // a non-root node always carries the action that created it
                if let Some(action) = current.action {
                    actions.push(action);
                }
                cells.push(current.state);
                current = nodes[parent];
            }
            actions.reverse();
            cells.reverse();

            return Ok(Solution {
                algorithm,
                actions,
                cells,
                expanded,
                explored,
            });
        }

        explored.insert(node.state);

        for (action, state) in maze.neighbors_of(node.state) {
            if !explored.contains(&state) && !frontier.contains_state(&nodes, state) {
                nodes.push(Node {
                    state,
                    parent: Some(id),
                    action: Some(action),
                });
                frontier.add(nodes.len() - 1);
            }
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use Direction::*;

    fn parse(s: &str) -> Maze {
        s.parse().unwrap()
    }

    /// Re-applies the actions from the start and checks each visited cell
    /// against the maze and the reported cell sequence
    fn assert_valid_path(maze: &Maze, solution: &Solution) {
        assert_eq!(solution.actions.len(), solution.cells.len());

        let mut at = maze.start;
        for (&action, &cell) in solution.actions.iter().zip(&solution.cells) {
            at = action.step(at).unwrap();
            assert_eq!(at, cell);
            assert!(!maze.is_wall(at));
        }
        assert_eq!(at, maze.goal);
    }

    #[test]
    fn test_frontier_stack_order() {
        let nodes = [
            Node {
                state: Point { row: 0, col: 0 },
                parent: None,
                action: None,
            },
            Node {
                state: Point { row: 0, col: 1 },
                parent: Some(0),
                action: Some(Right),
            },
        ];

        let mut frontier = Frontier::new(Algorithm::Dfs);
        frontier.add(0);
        frontier.add(1);

        assert!(frontier.contains_state(&nodes, Point { row: 0, col: 1 }));
        assert_eq!(frontier.remove(), Ok(1));
        assert_eq!(frontier.remove(), Ok(0));
        assert!(frontier.is_empty());
        assert_eq!(frontier.remove(), Err(SolveError::EmptyFrontier));
    }

    #[test]
    fn test_frontier_queue_order() {
        let mut frontier = Frontier::new(Algorithm::Bfs);
        frontier.add(0);
        frontier.add(1);

        assert_eq!(frontier.remove(), Ok(0));
        assert_eq!(frontier.remove(), Ok(1));
        assert_eq!(frontier.remove(), Err(SolveError::EmptyFrontier));
    }

    #[test]
    fn test_bfs_shortest_around_center_wall() {
        let maze = parse("A  \n O \n  B");

        let solution = solve(&maze, Algorithm::Bfs).unwrap();

        assert_eq!(solution.actions, vec![Down, Down, Right, Right]);
        assert_eq!(solution.cells.last(), Some(&maze.goal));
        assert!(solution.expanded <= 9);
        assert_valid_path(&maze, &solution);
    }

    #[test]
    fn test_dfs_same_length_around_center_wall() {
        let maze = parse("A  \n O \n  B");

        let solution = solve(&maze, Algorithm::Dfs).unwrap();

        // up/down/left/right expansion makes the stack pop rightward first
        assert_eq!(solution.actions, vec![Right, Right, Down, Down]);
        assert_valid_path(&maze, &solution);
    }

    #[test]
    fn test_bfs_never_longer_than_dfs() {
        let maze = parse(
            "A     \n OOOO \n      \n OOOOO\n     B",
        );

        let bfs = solve(&maze, Algorithm::Bfs).unwrap();
        let dfs = solve(&maze, Algorithm::Dfs).unwrap();

        // the only route runs down the left edge, 4 down + 5 right
        assert_eq!(bfs.actions.len(), 9);
        assert!(bfs.actions.len() <= dfs.actions.len());
        assert_valid_path(&maze, &bfs);
        assert_valid_path(&maze, &dfs);
    }

    #[test]
    fn test_no_solution() {
        let maze = parse("AOB");

        assert_eq!(solve(&maze, Algorithm::Dfs), Err(SolveError::NoSolution));
        assert_eq!(solve(&maze, Algorithm::Bfs), Err(SolveError::NoSolution));
    }

    #[test]
    fn test_adjacent_goal_single_move() {
        let maze = parse("AB");

        let solution = solve(&maze, Algorithm::Bfs).unwrap();

        assert_eq!(solution.actions, vec![Right]);
        assert_eq!(solution.cells, vec![Point { row: 0, col: 1 }]);
    }

    #[test]
    fn test_start_equals_goal_empty_path() {
        let mut maze = parse("AB");
        maze.goal = maze.start;

        let solution = solve(&maze, Algorithm::Dfs).unwrap();

        assert!(solution.actions.is_empty());
        assert!(solution.cells.is_empty());
        assert_eq!(solution.expanded, 1);
    }

    #[test]
    fn test_expansion_bounded_by_grid_size() {
        let maze = parse("A  \n   \n  B");

        for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
            let solution = solve(&maze, algorithm).unwrap();
            assert!(solution.expanded <= maze.height * maze.width);
            // expanded states are distinct, so the explored set plus the
            // goal node accounts for every removal
            assert_eq!(solution.expanded, solution.explored.len() + 1);
        }
    }

    #[test]
    fn test_explored_excludes_goal() {
        let maze = parse("A  \n O \n  B");

        let solution = solve(&maze, Algorithm::Bfs).unwrap();

        assert!(!solution.explored.contains(&maze.goal));
        assert!(solution.explored.contains(&maze.start));
    }
}
