use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solver::{solve, Algorithm, Maze};

fn load_serpentine() -> Maze {
    let text = std::fs::read_to_string("../data/serpentine.txt").unwrap();
    text.parse().unwrap()
}

fn bench_algorithm(c: &mut Criterion, algorithm: Algorithm) {
    let maze = load_serpentine();

    c.bench_function(&format!("serpentine_{}", algorithm), |b| {
        b.iter(|| {
            let solution = solve(black_box(&maze), black_box(algorithm)).unwrap();
            assert!(!solution.cells.is_empty());
        })
    });
}

pub fn serpentine_dfs(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Dfs);
}

pub fn serpentine_bfs(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Bfs);
}

criterion_group!(benches, serpentine_dfs, serpentine_bfs);
criterion_main!(benches);
