pub mod brighten;
pub mod pipe;
pub mod traits;

pub mod prelude {
    pub use super::brighten::{BrightenTransform, Overflow, Strategy};
    pub use super::pipe::{PipeableTextures, PipeableTransform, Pipeline};
    pub use super::traits::TextureTransform;
}
