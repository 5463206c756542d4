use criterion::{Criterion, criterion_group, criterion_main};

mod bench_utils;

use brighter::{
    error::Result,
    texture::{Shape, TextureMutSlice, TextureSlice},
    transform::prelude::{BrightenTransform, Overflow, Strategy, TextureTransform},
};
use brighter_macros::simd_targets;
use rayon::prelude::*;

/// Every sample in its own rayon task, no row partitioning.
#[simd_targets]
fn samples_par_impl(in_buf: &[u8], out_buf: &mut [u8], offset: u8) {
    out_buf
        .par_iter_mut()
        .zip(in_buf.par_iter())
        .for_each(|(dst, src)| *dst = src.wrapping_add(offset));
}

/// Fixed size chunks ignoring row boundaries.
#[simd_targets]
fn chunks_par_impl(in_buf: &[u8], out_buf: &mut [u8], offset: u8) {
    const CHUNK: usize = 3 * 4096;
    out_buf
        .par_chunks_mut(CHUNK)
        .zip(in_buf.par_chunks(CHUNK))
        .for_each(|(out_chunk, in_chunk)| {
            out_chunk
                .iter_mut()
                .zip(in_chunk)
                .for_each(|(dst, src)| *dst = src.wrapping_add(offset))
        });
}

struct SamplesPar {}

impl TextureTransform for SamplesPar {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, u8>,
        mut output: TextureMutSlice<'o, u8>,
    ) -> (TextureSlice<'i, u8>, TextureMutSlice<'o, u8>) {
        samples_par_impl(input.as_ref(), output.as_mut(), 10);
        (input, output)
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) -> Result {
        BrightenTransform::validate(in_shape, out_shape)
    }
}

struct ChunksPar {}

impl TextureTransform for ChunksPar {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, u8>,
        mut output: TextureMutSlice<'o, u8>,
    ) -> (TextureSlice<'i, u8>, TextureMutSlice<'o, u8>) {
        chunks_par_impl(input.as_ref(), output.as_mut(), 10);
        (input, output)
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) -> Result {
        BrightenTransform::validate(in_shape, out_shape)
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("brighten_transform_par");

    // around the auto threshold
    let sizes = [100u32, 400, 450, 500, 600, 1200];
    bench_utils::bench_transform_by_size(
        &mut group,
        &mut BrightenTransform::new(Strategy::Flat, 10, Overflow::Wrap),
        "flat",
        &sizes,
    );
    bench_utils::bench_transform_by_size(
        &mut group,
        &mut BrightenTransform::new(Strategy::Par, 10, Overflow::Wrap),
        "par_rows",
        &sizes,
    );
    bench_utils::bench_transform_by_size(&mut group, &mut SamplesPar {}, "par_samples", &sizes);
    bench_utils::bench_transform_by_size(&mut group, &mut ChunksPar {}, "par_chunks", &sizes);

    group.finish();
}

criterion_group!(brighten_transform_par, criterion_benchmark);
criterion_main!(brighten_transform_par);
