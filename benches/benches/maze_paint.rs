//! Benchmark suite for maze background painting
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dogmaze_benches::{generate_layout, generate_rotation, sizes};
use dogmaze_sprites::{
	config::{MazePalette, TileSize},
	maze::{MazeGrid, MazeSprites, decorate},
};

fn maze(rows: usize, cols: usize) -> MazeSprites {
	let layout = MazeGrid::parse(&generate_layout(rows, cols)).expect("valid layout");
	let rotation = MazeGrid::parse(&generate_rotation(rows, cols)).expect("valid rotation");
	MazeSprites::new(layout, rotation, MazePalette::default(), TileSize::square(16))
		.expect("matching grids")
}

/// Benchmark full background construction
fn bench_background(c: &mut Criterion) {
	let mut group = c.benchmark_group("maze_background");

	for (name, (rows, cols)) in
		[("small", sizes::SMALL), ("arcade", sizes::ARCADE), ("large", sizes::LARGE)]
	{
		let maze = maze(rows, cols);
		let (width, height) = maze.pixel_size();
		group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
		group.bench_with_input(BenchmarkId::new("background", name), &maze, |b, maze| {
			b.iter(|| black_box(maze.background(black_box(0))));
		});
	}

	group.finish();
}

/// Benchmark the per-cell rule on its own
fn bench_decorate(c: &mut Criterion) {
	let (rows, cols) = sizes::ARCADE;
	let maze = maze(rows, cols);

	c.bench_function("maze_decorate_arcade", |b| {
		b.iter(|| {
			for (row, col, _) in maze.layout().cells() {
				black_box(decorate(maze.layout(), row, col));
			}
		});
	});
}

/// Benchmark grid parsing
fn bench_parse(c: &mut Criterion) {
	let (rows, cols) = sizes::ARCADE;
	let text = generate_layout(rows, cols);

	c.bench_function("maze_parse_arcade", |b| {
		b.iter(|| MazeGrid::parse(black_box(&text)));
	});
}

criterion_group!(benches, bench_background, bench_decorate, bench_parse);
criterion_main!(benches);
