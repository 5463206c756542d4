use std::{fmt::Display, str::FromStr};

use brighter_macros::simd_targets;
use tracing::{debug, trace};

use crate::{
    error::{BrighterError, Result},
    layout::Layout,
    texture::{Shape, Shape2D, TextureMutSlice, TextureRef, TextureSlice},
    transform::traits::TextureTransform,
};

/// Channel count the brighten kernel is specialized to.
pub const CHANNELS: usize = 3;

/// Offset applied by the reference kernel.
pub const DEFAULT_OFFSET: u8 = 10;

/// What happens when `sample + offset` leaves the u8 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Modulo 256, `250 + 10 == 4`.
    #[default]
    Wrap,
    /// Clamp at 255, `250 + 10 == 255`.
    Saturate,
}

impl Overflow {
    #[inline(always)]
    pub fn add(self, sample: u8, offset: u8) -> u8 {
        match self {
            Overflow::Wrap => sample.wrapping_add(offset),
            Overflow::Saturate => sample.saturating_add(offset),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Overflow::Wrap => "wrap",
            Overflow::Saturate => "saturate",
        }
    }
}

impl FromStr for Overflow {
    type Err = BrighterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wrap" => Ok(Overflow::Wrap),
            "saturate" => Ok(Overflow::Saturate),
            other => Err(BrighterError::Config(format!(
                "Not recognized overflow policy {}",
                other
            ))),
        }
    }
}

/// Loop schedule used to run the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// y, x, c loop nest addressed through the interleaved layout.
    Seq,
    /// One contiguous pass over all pixel runs.
    Flat,
    /// Rows spread over the rayon pool.
    Par,
}

impl Strategy {
    /// Pick a strategy for an image of `shape_hint`.
    pub fn auto(shape_hint: Shape2D) -> Self {
        let (width, height) = shape_hint;
        let count = width * height;

        let strategy = if width < 450 || count < 202500 {
            Strategy::Flat
        } else {
            Strategy::Par
        };
        debug!(width, height, strategy = %strategy, "selected brighten strategy");
        strategy
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Seq => "seq",
            Strategy::Flat => "flat",
            Strategy::Par => "par",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = BrighterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "seq" => Ok(Strategy::Seq),
            "flat" => Ok(Strategy::Flat),
            "par" => Ok(Strategy::Par),
            other => Err(BrighterError::Config(format!(
                "Not recognized strategy {}",
                other
            ))),
        }
    }
}

/// Adds a constant offset to every sample of a 3 channel interleaved u8 texture.
///
/// `output(x, y, c) = input(x, y, c) + offset` under the [Overflow] policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightenTransform {
    strategy: Strategy,
    offset: u8,
    overflow: Overflow,
}

impl BrightenTransform {
    pub fn new(strategy: Strategy, offset: u8, overflow: Overflow) -> Self {
        Self {
            strategy,
            offset,
            overflow,
        }
    }

    /// Wrapping brighten with a strategy fit for `shape_hint`.
    pub fn auto(shape_hint: Shape2D, offset: u8) -> Self {
        Self::new(Strategy::auto(shape_hint), offset, Overflow::Wrap)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Shape checks shared by every strategy.
    pub fn validate(in_shape: Shape, out_shape: Shape) -> Result {
        if in_shape.2 != CHANNELS {
            return Err(BrighterError::InvalidChannelCount(in_shape.2));
        }
        if in_shape != out_shape {
            return Err(BrighterError::ShapeMismatch {
                expected: in_shape,
                found: out_shape,
            });
        }
        Ok(())
    }
}

impl TextureTransform for BrightenTransform {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        mut output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    ) {
        debug_assert_eq!(input.shape(), output.shape());
        let layout = input.layout();
        if layout.is_empty() {
            return (input, output);
        }
        trace!(
            strategy = %self.strategy,
            offset = self.offset,
            overflow = self.overflow.name(),
            "brighten"
        );

        match self.strategy {
            Strategy::Seq => seq_impl(
                input.as_ref(),
                output.as_mut(),
                layout,
                self.offset,
                self.overflow,
            ),
            Strategy::Flat => run_impl(input.as_ref(), output.as_mut(), self.offset, self.overflow),
            Strategy::Par => par_impl(
                input.as_ref(),
                output.as_mut(),
                layout.y.stride,
                self.offset,
                self.overflow,
            ),
        }
        (input, output)
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) -> Result {
        Self::validate(in_shape, out_shape)
    }
}

fn seq_impl(in_buf: &[u8], out_buf: &mut [u8], layout: Layout, offset: u8, overflow: Overflow) {
    debug_assert!(layout.is_interleaved() && layout.channels() == CHANNELS);
    for y in 0..layout.height() as i32 {
        for x in 0..layout.width() as i32 {
            // channel run is contiguous, unrolled
            let base = layout.offset(x, y, 0);
            out_buf[base] = overflow.add(in_buf[base], offset);
            out_buf[base + 1] = overflow.add(in_buf[base + 1], offset);
            out_buf[base + 2] = overflow.add(in_buf[base + 2], offset);
        }
    }
}

/// Brighten a contiguous sequence of whole pixels.
#[simd_targets]
fn run_impl(in_buf: &[u8], out_buf: &mut [u8], offset: u8, overflow: Overflow) {
    debug_assert!(in_buf.len() % CHANNELS == 0 && in_buf.len() == out_buf.len());
    let pixels = out_buf
        .chunks_exact_mut(CHANNELS)
        .zip(in_buf.chunks_exact(CHANNELS));
    match overflow {
        Overflow::Wrap => pixels.for_each(|(out_pixel, in_pixel)| {
            out_pixel[0] = in_pixel[0].wrapping_add(offset);
            out_pixel[1] = in_pixel[1].wrapping_add(offset);
            out_pixel[2] = in_pixel[2].wrapping_add(offset);
        }),
        Overflow::Saturate => pixels.for_each(|(out_pixel, in_pixel)| {
            out_pixel[0] = in_pixel[0].saturating_add(offset);
            out_pixel[1] = in_pixel[1].saturating_add(offset);
            out_pixel[2] = in_pixel[2].saturating_add(offset);
        }),
    }
}

fn par_impl(in_buf: &[u8], out_buf: &mut [u8], row_stride: usize, offset: u8, overflow: Overflow) {
    use rayon::prelude::*;

    out_buf
        .par_chunks_exact_mut(row_stride)
        .zip(in_buf.par_chunks_exact(row_stride))
        .for_each(|(out_row, in_row)| run_impl(in_row, out_row, offset, overflow));
}
