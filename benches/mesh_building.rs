use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use oled_bitmap::math::Viewport;
use oled_bitmap::{pack, Canvas, GridMesh};

const VIEWPORT: Viewport = Viewport::new(800.0, 720.0);

/// Canvas with roughly every third cell filled
fn checkered_canvas(size: u32) -> Canvas {
    let mut canvas = Canvas::new(size, size);
    for row in 0..size {
        for col in 0..size {
            if (row + col) % 3 == 0 {
                canvas.paint(row, col);
            }
        }
    }
    canvas
}

/// Benchmark: full mesh rebuild at each slider size
fn bench_mesh_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_rebuild");

    for size in [8u32, 32, 128].iter() {
        let canvas = checkered_canvas(*size);
        let mut mesh = GridMesh::default();

        group.bench_with_input(BenchmarkId::new("checkered", size), size, |b, _| {
            b.iter(|| {
                mesh.rebuild(black_box(&canvas), &VIEWPORT);
                black_box(mesh.quad_count())
            })
        });
    }

    group.finish();
}

/// Benchmark: rebuild of a blank 128x128 canvas (grid lines only)
fn bench_mesh_rebuild_blank(c: &mut Criterion) {
    let canvas = Canvas::new(128, 128);
    let mut mesh = GridMesh::default();

    c.bench_function("mesh_rebuild_blank_128", |b| {
        b.iter(|| {
            mesh.rebuild(black_box(&canvas), &VIEWPORT);
            black_box(mesh.line_vertices().len())
        })
    });
}

/// Benchmark: bit packing plus text formatting of the largest canvas
fn bench_export(c: &mut Criterion) {
    let canvas = checkered_canvas(128);

    c.bench_function("pack_128", |b| {
        b.iter(|| black_box(pack(black_box(&canvas))).byte_count())
    });

    c.bench_function("pack_and_format_128", |b| {
        b.iter(|| black_box(pack(black_box(&canvas)).to_string()))
    });
}

criterion_group!(benches, bench_mesh_rebuild, bench_mesh_rebuild_blank, bench_export);

criterion_main!(benches);
