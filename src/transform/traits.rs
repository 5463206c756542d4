use crate::{
    error::Result,
    texture::{Shape, TextureMutSlice, TextureRef, TextureSlice},
};

/// Core trait for applying a transform to texture data.
///
/// Uses associated types for Input/Output to ensure type safety when chaining.
/// Lifetimes are method-local, allowing flexible borrowing without lifetime hell.
pub trait TextureTransform: Sized {
    type Input;
    type Output;

    /// Apply the transform from input texture to output texture.
    ///
    /// Shapes must have passed [TextureTransform::prepare] beforehand. Calling
    /// `apply` on unprepared shapes breaks the contract: implementations may
    /// panic or leave part of `output` unwritten. Use [TextureTransform::once]
    /// or `PipeableTextures::pipe` when the shapes are not already checked.
    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    );

    /// Validate shapes before any sample is written.
    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) -> Result;

    /// Apply once. Alias for [TextureTransform::prepare] followed by [TextureTransform::apply].
    fn once<'i, 'o>(
        mut self,
        input: TextureSlice<'i, Self::Input>,
        output: TextureMutSlice<'o, Self::Output>,
    ) -> Result<(
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    )> {
        self.prepare(input.shape(), output.shape())?;
        Ok(self.apply(input, output))
    }
}
