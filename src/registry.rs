//! Named kernels.
//!
//! A [KernelRegistry] is owned by the caller; nothing is registered globally.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    config::BrightenConfig,
    error::{BrighterError, Result},
    texture::{TextureMutSlice, TextureRef, TextureSlice},
    transform::traits::TextureTransform,
};

/// A u8 texture kernel that can be dispatched by name.
pub trait Kernel: Send + Sync {
    fn name(&self) -> &str;

    /// Validate shapes, then fill `output` from `input`.
    fn run(&self, input: TextureSlice<'_, u8>, output: TextureMutSlice<'_, u8>) -> Result;
}

/// Brighten kernel, `"brighter"` by default.
#[derive(Debug, Clone)]
pub struct Brighter {
    name: String,
    config: BrightenConfig,
}

impl Brighter {
    pub const NAME: &'static str = "brighter";

    pub fn new(name: impl Into<String>, config: BrightenConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    pub fn config(&self) -> &BrightenConfig {
        &self.config
    }
}

impl Default for Brighter {
    /// Offset 10, wrapping.
    fn default() -> Self {
        Self::new(Self::NAME, BrightenConfig::default())
    }
}

impl Kernel for Brighter {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, input: TextureSlice<'_, u8>, output: TextureMutSlice<'_, u8>) -> Result {
        self.config
            .build(input.shape_2d())
            .once(input, output)
            .map(|_| ())
    }
}

#[derive(Default)]
pub struct KernelRegistry {
    kernels: HashMap<String, Box<dyn Kernel>>,
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the reference [Brighter] kernel.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Brighter::default());
        registry
    }

    /// Register `kernel` under its name, returning the kernel it replaced.
    pub fn register<K: Kernel + 'static>(&mut self, kernel: K) -> Option<Box<dyn Kernel>> {
        let name = kernel.name().to_owned();
        debug!(kernel = %name, "registering kernel");
        self.kernels.insert(name, Box::new(kernel))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Kernel> {
        self.kernels.get(name).map(|k| &**k)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.kernels.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    pub fn dispatch(
        &self,
        name: &str,
        input: TextureSlice<'_, u8>,
        output: TextureMutSlice<'_, u8>,
    ) -> Result {
        let kernel = self
            .get(name)
            .ok_or_else(|| BrighterError::UnknownKernel(name.to_owned()))?;
        debug!(kernel = name, width = input.width(), height = input.height(), "dispatch");
        kernel.run(input, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        texture::Texture,
        transform::brighten::{Overflow, Strategy},
    };

    #[test]
    fn test_dispatch_reference_kernel() {
        let registry = KernelRegistry::with_defaults();
        let input = Texture::from_vec(2, 1, 3, vec![0, 0, 0, 250, 100, 5]).unwrap();
        let mut output = Texture::<u8>::new(2, 1, 3);

        registry
            .dispatch(
                "brighter",
                input.as_texture_slice(),
                output.as_texture_mut_slice(),
            )
            .unwrap();

        assert_eq!(output.as_ref(), &[10, 10, 10, 4, 110, 15]);
    }

    #[test]
    fn test_dispatch_unknown_kernel() {
        let registry = KernelRegistry::with_defaults();
        let input = Texture::<u8>::new(1, 1, 3);
        let mut output = Texture::<u8>::new(1, 1, 3);

        let err = registry
            .dispatch("darker", input.as_texture_slice(), output.as_texture_mut_slice())
            .unwrap_err();
        assert!(matches!(err, BrighterError::UnknownKernel(name) if name == "darker"));
    }

    #[test]
    fn test_dispatch_propagates_validation() {
        let registry = KernelRegistry::with_defaults();
        let input = Texture::<u8>::new(2, 2, 1);
        let mut output = Texture::<u8>::new(2, 2, 1);

        let err = registry
            .dispatch("brighter", input.as_texture_slice(), output.as_texture_mut_slice())
            .unwrap_err();
        assert!(matches!(err, BrighterError::InvalidChannelCount(1)));
    }

    #[test]
    fn test_register_replaces_by_name() {
        let mut registry = KernelRegistry::with_defaults();
        let saturating = Brighter::new(
            Brighter::NAME,
            BrightenConfig {
                offset: 100,
                overflow: Overflow::Saturate,
                strategy: Some(Strategy::Seq),
            },
        );
        let replaced = registry.register(saturating);
        assert_eq!(replaced.map(|k| k.name().to_owned()).as_deref(), Some("brighter"));
        assert_eq!(registry.len(), 1);

        let input = Texture::from_vec(1, 1, 3, vec![200, 100, 0]).unwrap();
        let mut output = Texture::<u8>::new(1, 1, 3);
        registry
            .dispatch("brighter", input.as_texture_slice(), output.as_texture_mut_slice())
            .unwrap();
        assert_eq!(output.as_ref(), &[255, 200, 100]);
    }

    #[test]
    fn test_multiple_named_kernels() {
        let mut registry = KernelRegistry::new();
        assert!(registry.is_empty());
        registry.register(Brighter::default());
        registry.register(Brighter::new(
            "brighter_20",
            BrightenConfig {
                offset: 20,
                ..BrightenConfig::default()
            },
        ));

        let mut names: Vec<&str> = registry.names().collect();
        names.sort();
        assert_eq!(names, ["brighter", "brighter_20"]);
        assert_eq!(registry.get("brighter_20").map(|k| k.name()), Some("brighter_20"));
    }
}
