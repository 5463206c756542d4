//! Memory layout descriptors.
//!
//! A [Layout] maps logical `(x, y, c)` coordinates to offsets in a flat sample
//! buffer. Brighter kernels work on the interleaved layout, where the channel
//! run of one pixel is contiguous.

/// Numeric class of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Int,
    UInt,
    Float,
}

/// Type of one sample in terms of kind, bit width and vector lanes.
///
/// `SampleType::new(SampleKind::UInt, 8)` is one 8-bit unsigned integer per
/// channel, `SampleType::new(SampleKind::Float, 32)` one float per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleType {
    pub kind: SampleKind,
    pub bits: u8,
    pub lanes: u16,
}

impl SampleType {
    pub const U8: SampleType = SampleType::new(SampleKind::UInt, 8);
    pub const U16: SampleType = SampleType::new(SampleKind::UInt, 16);
    pub const F32: SampleType = SampleType::new(SampleKind::Float, 32);

    pub const fn new(kind: SampleKind, bits: u8) -> Self {
        Self::with_lanes(kind, bits, 1)
    }

    pub const fn with_lanes(kind: SampleKind, bits: u8, lanes: u16) -> Self {
        Self { kind, bits, lanes }
    }

    /// Size of one sample in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        (self.bits as usize / 8) * self.lanes as usize
    }
}

/// One axis of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    /// Smallest valid coordinate on this axis.
    pub min: i32,
    /// Number of valid coordinates on this axis.
    pub extent: usize,
    /// Distance in samples between two neighbouring coordinates.
    pub stride: usize,
}

impl Dimension {
    pub const fn new(min: i32, extent: usize, stride: usize) -> Self {
        Self {
            min,
            extent,
            stride,
        }
    }

    #[inline]
    pub fn contains(&self, coord: i32) -> bool {
        coord >= self.min && ((coord - self.min) as usize) < self.extent
    }
}

/// Per-dimension stride/extent/min description of an `(x, y, c)` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    pub x: Dimension,
    pub y: Dimension,
    pub c: Dimension,
}

impl Layout {
    /// Channel fastest, then x, then y.
    pub const fn interleaved(width: usize, height: usize, channels: usize) -> Self {
        Self {
            x: Dimension::new(0, width, channels),
            y: Dimension::new(0, height, channels * width),
            c: Dimension::new(0, channels, 1),
        }
    }

    /// x fastest, then y, each channel a full image block.
    pub const fn planar(width: usize, height: usize, channels: usize) -> Self {
        Self {
            x: Dimension::new(0, width, 1),
            y: Dimension::new(0, height, width),
            c: Dimension::new(0, channels, width * height),
        }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.x.extent
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.y.extent
    }

    #[inline]
    pub const fn channels(&self) -> usize {
        self.c.extent
    }

    /// Number of dimensions the buffer exposes.
    ///
    /// Single plane buffers drop the channel axis.
    #[inline]
    pub const fn rank(&self) -> usize {
        if self.c.extent < 2 { 2 } else { 3 }
    }

    /// Number of addressable samples.
    #[inline]
    pub const fn len(&self) -> usize {
        self.x.extent * self.y.extent * self.c.extent
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_interleaved(&self) -> bool {
        *self == Self::interleaved(self.width(), self.height(), self.channels())
    }

    pub fn is_planar(&self) -> bool {
        *self == Self::planar(self.width(), self.height(), self.channels())
    }

    pub fn contains(&self, x: i32, y: i32, c: i32) -> bool {
        self.x.contains(x) && self.y.contains(y) && self.c.contains(c)
    }

    /// Flat sample offset of `(x, y, c)`.
    ///
    /// Coordinates must be in bounds, see [Layout::contains].
    #[inline(always)]
    pub fn offset(&self, x: i32, y: i32, c: i32) -> usize {
        debug_assert!(self.contains(x, y, c), "({x}, {y}, {c}) out of bounds");
        (x - self.x.min) as usize * self.x.stride
            + (y - self.y.min) as usize * self.y.stride
            + (c - self.c.min) as usize * self.c.stride
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleaved_strides() {
        let layout = Layout::interleaved(5, 4, 3);
        assert_eq!(layout.c, Dimension::new(0, 3, 1));
        assert_eq!(layout.x, Dimension::new(0, 5, 3));
        assert_eq!(layout.y, Dimension::new(0, 4, 15));
        assert!(layout.is_interleaved());
        assert!(!layout.is_planar());
    }

    #[test]
    fn test_interleaved_offsets_are_dense() {
        let layout = Layout::interleaved(5, 4, 3);
        let mut expected = 0;
        for y in 0..4 {
            for x in 0..5 {
                for c in 0..3 {
                    assert_eq!(layout.offset(x, y, c), expected);
                    expected += 1;
                }
            }
        }
        assert_eq!(expected, layout.len());
    }

    #[test]
    fn test_planar_offsets() {
        let layout = Layout::planar(5, 4, 3);
        assert_eq!(layout.offset(0, 0, 1), 20);
        assert_eq!(layout.offset(2, 1, 2), 40 + 5 + 2);
    }

    #[test]
    fn test_offset_honours_min() {
        let mut layout = Layout::interleaved(4, 4, 3);
        layout.x.min = -2;
        assert!(layout.contains(-2, 0, 0));
        assert!(!layout.contains(2, 0, 0));
        assert_eq!(layout.offset(-2, 0, 0), 0);
        assert_eq!(layout.offset(-1, 0, 2), 5);
    }

    #[test]
    fn test_rank_drops_single_channel() {
        assert_eq!(Layout::interleaved(8, 8, 1).rank(), 2);
        assert_eq!(Layout::interleaved(8, 8, 3).rank(), 3);
    }

    #[test]
    fn test_sample_type_size() {
        assert_eq!(SampleType::U8.size(), 1);
        assert_eq!(SampleType::U16.size(), 2);
        assert_eq!(SampleType::F32.size(), 4);
        assert_eq!(SampleType::with_lanes(SampleKind::Float, 32, 4).size(), 16);
    }
}
