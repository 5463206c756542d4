use rand::Rng;

use crate::texture::Texture;

pub const TEST_IMAGE_SIZE: usize = 64;

pub fn gen_random_texture(width: usize, height: usize) -> Texture<u8> {
    let mut rng = rand::rng();
    let samples: Vec<u8> = (0..width * height * 3).map(|_| rng.random::<u8>()).collect();
    Texture::from_vec(width as u32, height as u32, 3, samples).unwrap()
}

/// Random `(width, height)`, both at least 1.
pub fn rand_shape(rng: &mut rand::rngs::ThreadRng, max: usize) -> (usize, usize) {
    (rng.random_range(1..=max), rng.random_range(1..=max))
}
