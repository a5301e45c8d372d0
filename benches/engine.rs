//! Benchmarks for the Lenia engine.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use lenia::{
    compute::{FftConvolver, FftScratch, Kernel, LeniaEngine},
    schema::{LeniaParameters, Pattern, Seed, SimulationConfig},
};

fn bench_engine_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_step");

    for size in [64, 128, 256, 512, 1024] {
        let config = SimulationConfig {
            width: size,
            height: size,
            parameters: LeniaParameters::default(),
        };

        let seed = Seed {
            pattern: Pattern::Noise {
                amplitude: 1.0,
                seed: Some(42),
            },
        };

        let mut engine = LeniaEngine::from_config(&config, &seed).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(&mut engine).step().unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_kernel_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolution_by_radius");

    for radius in [5.0, 13.0, 40.0] {
        let (width, height) = (256, 256);
        let kernel = Kernel::new(width, height, radius).unwrap();
        let convolver = FftConvolver::new(width, height);
        let spectrum = convolver.fft2d(&kernel.shifted());
        let mut scratch = FftScratch::new(&convolver);
        let input: Vec<f64> = (0..width * height).map(|i| (i % 17) as f64 / 17.0).collect();
        let mut output = vec![0.0; width * height];

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("R={}", radius)),
            &radius,
            |b, _| {
                b.iter(|| {
                    convolver.convolve_spectrum_into(
                        black_box(&input),
                        &spectrum,
                        &mut scratch,
                        &mut output,
                    );
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_engine_step, bench_kernel_radius);
criterion_main!(benches);
