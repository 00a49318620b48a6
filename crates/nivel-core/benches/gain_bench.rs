//! Criterion benchmarks for the gain stage render path
//!
//! Run with: cargo bench -p nivel-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nivel_core::{AudioBlock, ChannelPair, GainStage};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_plain(c: &mut Criterion) {
    let mut group = c.benchmark_group("GainStage");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("split", block_size),
            &block_size,
            |b, _| {
                let mut stage = GainStage::new();
                let mut output = vec![0.0f32; block_size];
                b.iter(|| {
                    let mut pairs =
                        [ChannelPair::Split { input: &input[..], output: &mut output[..] }];
                    let mut block = AudioBlock::new(&mut pairs, block_size);
                    stage.process(black_box(&mut block));
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("in_place", block_size),
            &block_size,
            |b, _| {
                let mut stage = GainStage::new();
                let mut buffer = input.clone();
                b.iter(|| {
                    let mut pairs = [ChannelPair::InPlace(&mut buffer[..])];
                    let mut block = AudioBlock::new(&mut pairs, block_size);
                    stage.process(black_box(&mut block));
                });
            },
        );
    }

    group.finish();
}

fn bench_side_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("GainStage/side_chain");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        let aux = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("stereo", block_size),
            &block_size,
            |b, _| {
                let mut stage = GainStage::new();
                let mut left = vec![0.0f32; block_size];
                let mut right = vec![0.0f32; block_size];
                b.iter(|| {
                    let mut pairs = [
                        ChannelPair::Split { input: &input[..], output: &mut left[..] },
                        ChannelPair::Split { input: &input[..], output: &mut right[..] },
                    ];
                    let mut block =
                        AudioBlock::new(&mut pairs, block_size).with_side_chain(&aux[..]);
                    stage.process(black_box(&mut block));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_plain, bench_side_chain);
criterion_main!(benches);
