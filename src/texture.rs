use image::{ImageBuffer, Rgb, RgbImage};
use itertools::iproduct;

use crate::{
    error::{BrighterError, Result},
    layout::Layout,
};

/// (width, height, planes)
pub type Shape = (usize, usize, usize);
/// (width, height)
pub type Shape2D = (usize, usize);

/// Trait defining ops available on Textures with
/// lendable inner buffer.
///
/// Samples are interleaved: planes fastest, then x, then y.
pub trait TextureRef: AsRef<[Self::Inner]> {
    type Inner;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn planes(&self) -> u32;

    #[inline]
    fn shape(&self) -> Shape {
        (
            self.width() as usize,
            self.height() as usize,
            self.planes() as usize,
        )
    }

    #[inline]
    fn shape_2d(&self) -> Shape2D {
        (self.width() as usize, self.height() as usize)
    }

    #[inline]
    fn layout(&self) -> Layout {
        let (width, height, planes) = self.shape();
        Layout::interleaved(width, height, planes)
    }
}

/// Trait defining ops available on mutable
/// Textures
pub trait TextureMut: TextureRef + AsMut<[Self::Inner]> {}

/// Number of samples a texture of `shape` holds, counted in `usize`.
#[inline]
pub fn sample_count(shape: Shape) -> usize {
    shape.0 * shape.1 * shape.2
}

fn check_len(shape: Shape, len: usize) -> Result {
    let expected = sample_count(shape);
    if expected != len {
        return Err(BrighterError::BufferLength {
            expected,
            found: len,
        });
    }
    Ok(())
}

/// Texture with owned buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture<T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: Vec<T>,
}

impl<T> AsRef<[T]> for Texture<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> AsMut<[T]> for Texture<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T> TextureRef for Texture<T> {
    type Inner = T;

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn planes(&self) -> u32 {
        self.planes
    }
}

impl<T> TextureMut for Texture<T> {}

impl<T> Texture<T> {
    /// Take ownership of an interleaved sample buffer.
    pub fn from_vec(width: u32, height: u32, planes: u32, buffer: Vec<T>) -> Result<Self> {
        check_len(
            (width as usize, height as usize, planes as usize),
            buffer.len(),
        )?;
        Ok(Self {
            width,
            height,
            planes,
            buffer,
        })
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buffer
    }

    pub fn as_texture_slice<'s>(&'s self) -> TextureSlice<'s, T> {
        TextureSlice {
            width: self.width,
            height: self.height,
            planes: self.planes,
            buffer: &self.buffer,
        }
    }

    pub fn as_texture_mut_slice<'s>(&'s mut self) -> TextureMutSlice<'s, T> {
        TextureMutSlice {
            width: self.width,
            height: self.height,
            planes: self.planes,
            buffer: &mut self.buffer,
        }
    }
}

impl<T: Clone> Texture<T> {
    pub fn from_slice(width: u32, height: u32, planes: u32, slice: &[T]) -> Result<Self> {
        Self::from_vec(width, height, planes, slice.to_owned())
    }
}

impl<T: Default + Copy> Texture<T> {
    pub fn new(width: u32, height: u32, planes: u32) -> Self {
        Self {
            width,
            height,
            planes,
            buffer: vec![
                T::default();
                sample_count((width as usize, height as usize, planes as usize))
            ],
        }
    }

    /// Zeroed texture of `shape`, rejecting extents that do not fit in u32.
    pub fn with_shape(shape: Shape) -> Result<Self> {
        let too_large = |_| BrighterError::ShapeTooLarge(shape);
        let width = u32::try_from(shape.0).map_err(too_large)?;
        let height = u32::try_from(shape.1).map_err(too_large)?;
        let planes = u32::try_from(shape.2).map_err(too_large)?;
        Ok(Self::new(width, height, planes))
    }

    /// Build an interleaved texture from planar data, where each plane is a
    /// full `width * height` block.
    pub fn from_planar(width: u32, height: u32, planes: u32, planar: &[T]) -> Result<Self> {
        let shape = (width as usize, height as usize, planes as usize);
        check_len(shape, planar.len())?;

        let mut texture = Self::new(width, height, planes);
        let src = Layout::planar(shape.0, shape.1, shape.2);
        let dst = texture.layout();
        for (y, x, c) in iproduct!(0..height as i32, 0..width as i32, 0..planes as i32) {
            texture.buffer[dst.offset(x, y, c)] = planar[src.offset(x, y, c)];
        }
        Ok(texture)
    }

    /// Copy the samples out in planar order.
    pub fn to_planar(&self) -> Vec<T> {
        let (width, height, planes) = self.shape();
        let mut planar = vec![T::default(); self.buffer.len()];
        let src = self.layout();
        let dst = Layout::planar(width, height, planes);
        for (c, y, x) in iproduct!(0..planes as i32, 0..height as i32, 0..width as i32) {
            planar[dst.offset(x, y, c)] = self.buffer[src.offset(x, y, c)];
        }
        planar
    }
}

impl<T: Copy> Texture<T> {
    /// # Panics
    /// This function will panic if the two slices have different lengths.
    pub fn copy_from_slice(&mut self, slice: &[T]) {
        self.buffer.copy_from_slice(slice);
    }

    /// Sample at `(x, y, c)`, `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32, c: u32) -> Option<T> {
        if x >= self.width || y >= self.height || c >= self.planes {
            return None;
        }
        let offset = self.layout().offset(x as i32, y as i32, c as i32);
        Some(self.buffer[offset])
    }
}

impl From<RgbImage> for Texture<u8> {
    fn from(value: RgbImage) -> Self {
        let (width, height) = value.dimensions();
        Texture {
            width,
            height,
            planes: 3,
            buffer: value.into_raw(),
        }
    }
}

impl Texture<u8> {
    /// Hand the buffer over to the `image` crate without copying.
    pub fn into_rgb_image(self) -> Result<RgbImage> {
        if self.planes != 3 {
            return Err(BrighterError::InvalidChannelCount(self.planes as usize));
        }
        let expected = sample_count(self.shape());
        let found = self.buffer.len();
        ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(self.width, self.height, self.buffer)
            .ok_or(BrighterError::BufferLength { expected, found })
    }
}

/// Texture with borrowed internal buffer
#[derive(Debug, Copy, Clone)]
pub struct TextureSlice<'a, T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: &'a [T],
}

impl<T> AsRef<[T]> for TextureSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn planes(&self) -> u32 {
        self.planes
    }
}

impl<'a, T> TextureSlice<'a, T> {
    pub fn new(width: u32, height: u32, planes: u32, buffer: &'a [T]) -> Result<Self> {
        check_len(
            (width as usize, height as usize, planes as usize),
            buffer.len(),
        )?;
        Ok(Self {
            width,
            height,
            planes,
            buffer,
        })
    }
}

impl<'a> TextureSlice<'a, u8> {
    pub fn from_image_buffer(image: &'a RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            planes: 3,
            buffer: image.as_raw(),
        }
    }
}

#[derive(Debug)]
pub struct TextureMutSlice<'a, T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: &'a mut [T],
}

impl<T> AsRef<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> AsMut<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureMutSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn planes(&self) -> u32 {
        self.planes
    }
}

impl<T> TextureMut for TextureMutSlice<'_, T> {}

impl<'a, T> TextureMutSlice<'a, T> {
    pub fn new(width: u32, height: u32, planes: u32, buffer: &'a mut [T]) -> Result<Self> {
        check_len(
            (width as usize, height as usize, planes as usize),
            buffer.len(),
        )?;
        Ok(Self {
            width,
            height,
            planes,
            buffer,
        })
    }

    /// Reborrow for a shorter lifetime, so the slice can be handed to a
    /// transform and used again afterwards.
    pub fn reborrow(&mut self) -> TextureMutSlice<'_, T> {
        TextureMutSlice {
            width: self.width,
            height: self.height,
            planes: self.planes,
            buffer: &mut *self.buffer,
        }
    }
}

pub mod prelude {
    pub use super::{Shape, Shape2D, Texture, TextureMut, TextureMutSlice, TextureRef, TextureSlice};
}
