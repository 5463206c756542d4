use crate::error::Result;
use crate::texture::{Shape, Texture, TextureMutSlice, TextureRef, TextureSlice};
use crate::transform::traits::TextureTransform;

/// Extension trait that enables pipeline chaining
pub trait PipeableTransform: TextureTransform + Sized {
    /// Chain this transform with another through an intermediate texture of `shape`.
    ///
    /// # Example
    /// ```ignore
    /// // brighten by 10, then by 20 more
    /// let mut pipeline = first.pipe_with_shape(second, (800, 600, 3))?;
    /// pipeline.once(input, output)?;
    /// ```
    fn pipe_with_shape<T>(
        self,
        next: T,
        shape: Shape,
    ) -> Result<Pipeline<Self::Input, Self::Output, T::Output, Self, T>>
    where
        T: TextureTransform<Input = Self::Output>,
        Self::Output: Default + Copy,
    {
        Ok(Pipeline::with_buffer(self, next, Texture::with_shape(shape)?))
    }

    /// Chain this transform with another using a pre-allocated intermediate buffer
    fn pipe_with_buffer<T>(
        self,
        next: T,
        intermediate: Texture<Self::Output>,
    ) -> Pipeline<Self::Input, Self::Output, T::Output, Self, T>
    where
        T: TextureTransform<Input = Self::Output>,
    {
        Pipeline::with_buffer(self, next, intermediate)
    }
}

// all TextureTransforms are pipeable
impl<T: TextureTransform> PipeableTransform for T {}

/// Two transforms chained A -> B -> C.
///
/// The intermediate texture B is owned and reused across invocations, only
/// A -> C is exposed.
pub struct Pipeline<A, B, C, T1, T2>
where
    T1: TextureTransform<Input = A, Output = B>,
    T2: TextureTransform<Input = B, Output = C>,
{
    t1: T1,
    t2: T2,
    b: Texture<B>,
}

impl<A, B, C, T1, T2> Pipeline<A, B, C, T1, T2>
where
    T1: TextureTransform<Input = A, Output = B>,
    T2: TextureTransform<Input = B, Output = C>,
{
    pub fn with_buffer(t1: T1, t2: T2, intermediate: Texture<B>) -> Self {
        Self {
            t1,
            t2,
            b: intermediate,
        }
    }

    pub fn intermediate(&self) -> &Texture<B> {
        &self.b
    }
}

impl<A, B, C, T1, T2> TextureTransform for Pipeline<A, B, C, T1, T2>
where
    T1: TextureTransform<Input = A, Output = B>,
    T2: TextureTransform<Input = B, Output = C>,
{
    type Input = A;
    type Output = C;

    #[inline(always)]
    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, A>,
        output: TextureMutSlice<'o, C>,
    ) -> (TextureSlice<'i, A>, TextureMutSlice<'o, C>) {
        let (input, _) = self.t1.apply(input, self.b.as_texture_mut_slice());
        let (_, output) = self.t2.apply(self.b.as_texture_slice(), output);
        (input, output)
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) -> Result {
        let b_shape = self.b.shape();
        self.t1.prepare(in_shape, b_shape)?;
        self.t2.prepare(b_shape, out_shape)
    }
}

/// Trait for texture pairs that can be pushed through a TextureTransform
pub trait PipeableTextures<'i, 'o> {
    type Input;
    type Output;

    /// Prepare and apply `transform` on this (input, output) pair.
    ///
    /// ```ignore
    /// (input.as_texture_slice(), output.as_texture_mut_slice()).pipe(&mut brighten)?;
    /// ```
    fn pipe<T>(
        self,
        transform: &mut T,
    ) -> Result<(
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    )>
    where
        T: TextureTransform<Input = Self::Input, Output = Self::Output>;
}

impl<'i, 'o, A, B> PipeableTextures<'i, 'o> for (TextureSlice<'i, A>, TextureMutSlice<'o, B>) {
    type Input = A;
    type Output = B;

    fn pipe<T>(self, transform: &mut T) -> Result<(TextureSlice<'i, A>, TextureMutSlice<'o, B>)>
    where
        T: TextureTransform<Input = A, Output = B>,
    {
        transform.prepare(self.0.shape(), self.1.shape())?;
        Ok(transform.apply(self.0, self.1))
    }
}
