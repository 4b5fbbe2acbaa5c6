use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sokocave::core::TileGrid;
use sokocave::generator::{can_place_box, generate_level, CaveCarver, GeneratorConfig};
use std::hint::black_box;

const BASES: &[(&str, &[&str])] = &[
    ("hall_10x7", &[
        "##########",
        "#@       #",
        "#        #",
        "#   ##   #",
        "#        #",
        "#        #",
        "##########",
    ]),
    ("rooms_12x8", &[
        "############",
        "#@    #    #",
        "#     #    #",
        "#          #",
        "###     ####",
        "#          #",
        "#    #     #",
        "############",
    ]),
    ("open_20x12", &[
        "####################",
        "#@                 #",
        "#                  #",
        "#     ###          #",
        "#                  #",
        "#          ##      #",
        "#          ##      #",
        "#                  #",
        "#   #              #",
        "#                  #",
        "#                  #",
        "####################",
    ]),
];

fn bench_carve(c: &mut Criterion) {
    let mut group = c.benchmark_group("carve");
    let config = GeneratorConfig::default();

    for &(name, rows) in BASES {
        let base = TileGrid::from_rows(rows);
        group.throughput(Throughput::Elements((base.width() * base.height()) as u64));
        group.bench_with_input(BenchmarkId::new("carve", name), &base, |b, base| {
            let mut rng = StdRng::seed_from_u64(12345);
            b.iter(|| {
                let Ok(mut carver) = CaveCarver::new(black_box(base), &config) else {
                    return;
                };
                carver.carve(&mut rng);
                black_box(carver);
            });
        });
    }
    group.finish();
}

fn bench_generate_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_level");
    let config = GeneratorConfig::default();

    for &(name, rows) in BASES {
        let bases = vec![TileGrid::from_rows(rows)];
        group.bench_with_input(BenchmarkId::new("generate_level", name), &bases, |b, bases| {
            let mut rng = StdRng::seed_from_u64(12345);
            b.iter(|| black_box(generate_level(black_box(bases), 0, &config, &mut rng)));
        });
    }
    group.finish();
}

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle");
    let config = GeneratorConfig::default();

    for &(name, rows) in BASES {
        let Ok(mut carver) = CaveCarver::new(&TileGrid::from_rows(rows), &config) else {
            continue;
        };
        carver.carve(&mut StdRng::seed_from_u64(7));
        let grid = carver.grid().clone();
        group.throughput(Throughput::Elements(grid.positions().count() as u64));
        group.bench_with_input(BenchmarkId::new("can_place_box", name), &grid, |b, grid| {
            b.iter(|| {
                grid.positions()
                    .filter(|&pos| can_place_box(black_box(grid), pos))
                    .count()
            });
        });
    }
    group.finish();
}

criterion_group!(
    generator_benches,
    bench_carve, bench_generate_level, bench_oracle
);

criterion_main!(generator_benches);
