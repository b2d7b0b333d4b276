use crate::error::{PixelWindowError, Result};

/// Bytes per texel (R, G, B, A)
pub const BYTES_PER_PIXEL: usize = 4;

/// RGB colour of a single texel
pub type Rgb = (u8, u8, u8);

/// Fixed-size RGBA pixel grid written by the host and uploaded every frame
///
/// Alpha is not used for blending; `set` always writes 255 so that written
/// texels are opaque. `clear` zeroes alpha too, leaving untouched texels
/// black until they are set again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    raw: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a zeroed buffer with dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize * BYTES_PER_PIXEL;

        Self {
            raw: vec![0; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Byte offset of texel (x, y)
    pub fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(PixelWindowError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(BYTES_PER_PIXEL * (y as usize * self.width as usize + x as usize))
    }

    /// Read the RGB value of a texel
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb> {
        let i = self.index(x, y)?;
        Ok((self.raw[i], self.raw[i + 1], self.raw[i + 2]))
    }

    /// Write the RGB value of a texel and make it opaque
    pub fn set(&mut self, x: u32, y: u32, (r, g, b): Rgb) -> Result<()> {
        let i = self.index(x, y)?;
        self.raw[i..i + BYTES_PER_PIXEL].copy_from_slice(&[r, g, b, 255]);
        Ok(())
    }

    /// Zero every byte, alpha included
    pub fn clear(&mut self) {
        self.raw.fill(0);
    }

    /// Set every texel to one opaque colour
    pub fn fill(&mut self, (r, g, b): Rgb) {
        for texel in self.raw.chunks_exact_mut(BYTES_PER_PIXEL) {
            texel.copy_from_slice(&[r, g, b, 255]);
        }
    }

    /// Raw RGBA bytes, row-major
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.raw
    }

    /// Texels as RGBA quadruples
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.raw)
    }

    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        bytemuck::cast_slice_mut(&mut self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_creation() {
        let buffer = PixelBuffer::new(100, 50);
        assert_eq!(buffer.dimensions(), (100, 50));
        assert_eq!(buffer.raw().len(), 100 * 50 * 4);
        assert_eq!(buffer.pixels().len(), 100 * 50);
        assert!(buffer.raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn index_is_row_major() {
        let buffer = PixelBuffer::new(10, 10);
        assert_eq!(buffer.index(0, 0).unwrap(), 0);
        assert_eq!(buffer.index(1, 0).unwrap(), 4);
        assert_eq!(buffer.index(0, 1).unwrap(), 40);
        assert_eq!(buffer.index(9, 9).unwrap(), 4 * 99);
    }

    #[test]
    fn set_writes_opaque_alpha() {
        let mut buffer = PixelBuffer::new(10, 10);
        buffer.set(5, 5, (100, 150, 200)).unwrap();

        let idx = (5 * 10 + 5) * 4;
        assert_eq!(&buffer.raw()[idx..idx + 4], &[100, 150, 200, 255]);
        assert_eq!(buffer.get(5, 5).unwrap(), (100, 150, 200));
    }

    #[test]
    fn set_does_not_touch_neighbours() {
        let mut buffer = PixelBuffer::new(3, 3);
        buffer.set(1, 1, (9, 9, 9)).unwrap();

        for y in 0..3 {
            for x in 0..3 {
                if (x, y) != (1, 1) {
                    assert_eq!(buffer.get(x, y).unwrap(), (0, 0, 0));
                }
            }
        }
    }

    #[test]
    fn clear_zeroes_alpha() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.fill((255, 255, 255));
        buffer.clear();

        assert!(buffer.raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn fill_sets_every_texel() {
        let mut buffer = PixelBuffer::new(4, 2);
        buffer.fill((1, 2, 3));

        assert!(buffer.pixels().iter().all(|p| *p == [1, 2, 3, 255]));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut buffer = PixelBuffer::new(10, 10);

        assert!(matches!(
            buffer.get(10, 0),
            Err(PixelWindowError::OutOfRange { x: 10, y: 0, .. })
        ));
        assert!(buffer.get(0, 10).is_err());
        assert!(buffer.set(100, 100, (255, 0, 0)).is_err());
        assert!(buffer.raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn pixels_mut_aliases_raw() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.pixels_mut()[1] = [7, 8, 9, 255];
        assert_eq!(buffer.get(1, 0).unwrap(), (7, 8, 9));
    }
}
