//! Brighten 3 channel, channel-interleaved u8 images by a constant offset.
//!
//! ```
//! use brighter::texture::Texture;
//!
//! let input = Texture::from_vec(2, 1, 3, vec![0, 0, 0, 250, 100, 5]).unwrap();
//! let output = brighter::apply(&input, 10).unwrap();
//! assert_eq!(output.as_ref(), &[10, 10, 10, 4, 110, 15]);
//! ```

use crate::{
    error::Result,
    texture::{Texture, TextureMutSlice, TextureRef, TextureSlice},
    transform::{brighten::BrightenTransform, traits::TextureTransform},
};

pub mod config;
pub mod error;
pub mod layout;
pub mod registry;
pub mod texture;
pub mod transform;


/// Brighten `input` into a newly allocated texture, wrapping on overflow.
pub fn apply(input: &Texture<u8>, offset: u8) -> Result<Texture<u8>> {
    let mut output = Texture::with_shape(input.shape())?;
    apply_into(input.as_texture_slice(), output.as_texture_mut_slice(), offset)?;
    Ok(output)
}

/// Brighten `input` into a caller provided `output` of the same shape,
/// wrapping on overflow.
///
/// Nothing is written when the shapes are rejected.
pub fn apply_into(
    input: TextureSlice<'_, u8>,
    output: TextureMutSlice<'_, u8>,
    offset: u8,
) -> Result {
    BrightenTransform::auto(input.shape_2d(), offset)
        .once(input, output)
        .map(|_| ())
}

pub mod prelude {
    pub use crate::config::BrightenConfig;
    pub use crate::error::{BrighterError, Result};
    pub use crate::layout::{Dimension, Layout, SampleKind, SampleType};
    pub use crate::registry::{Brighter, Kernel, KernelRegistry};
    pub use crate::texture::prelude::*;
    pub use crate::transform::prelude::*;
}
