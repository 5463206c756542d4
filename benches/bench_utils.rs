use std::{fmt::Display, hint::black_box};

use brighter::{
    texture::{Texture, TextureRef},
    transform::prelude::TextureTransform,
};
use criterion::{BenchmarkGroup, BenchmarkId, measurement::WallTime};
use rand::Rng;

/// Random interleaved 3 channel texture of `size` x `size`.
pub fn random_texture(size: u32) -> Texture<u8> {
    let mut rng = rand::rng();
    let samples: Vec<u8> = (0..size * size * 3).map(|_| rng.random::<u8>()).collect();
    black_box(Texture::from_vec(size, size, 3, samples).unwrap())
}

pub fn bench_transform<T: Display>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    id: BenchmarkId,
    param: T,
    transform: &mut impl TextureTransform<Input = u8, Output = u8>,
    input: Texture<u8>,
    mut output: Texture<u8>,
) {
    group.bench_with_input(id, &param, |b, _| {
        transform.prepare(input.shape(), output.shape()).unwrap();
        b.iter(|| {
            let res = transform.apply(input.as_texture_slice(), output.as_texture_mut_slice());
            black_box(res);
        });
    });
}

pub fn bench_transform_by_size(
    group: &mut BenchmarkGroup<'_, WallTime>,
    transform: &mut impl TextureTransform<Input = u8, Output = u8>,
    name: &str,
    sizes: &[u32],
) {
    for size in sizes {
        let input = random_texture(*size);
        let output = Texture::new(*size, *size, 3);
        bench_transform(
            group,
            BenchmarkId::new(name, size),
            size,
            transform,
            input,
            output,
        );
    }
}
