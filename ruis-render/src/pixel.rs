//! Pixel formats and images.

use crate::texture::{check_texels, Dims, TextureError};

/// Pixel format of 8-bit-per-channel images and textures.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Format {
  /// Single channel, read as luminance by shaders.
  Grey,
  /// Two channels, read as luminance and alpha by shaders.
  GreyAlpha,
  /// Red, green and blue channels.
  Rgb,
  /// Red, green, blue and alpha channels.
  Rgba,
}

impl Format {
  /// Number of channels of a pixel.
  pub fn channels(self) -> usize {
    match self {
      Format::Grey => 1,
      Format::GreyAlpha => 2,
      Format::Rgb => 3,
      Format::Rgba => 4,
    }
  }
}

/// A raster image: tightly packed 8-bit pixels, rows stored top to bottom.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
  format: Format,
  dims: Dims,
  pixels: Vec<u8>,
}

impl Image {
  /// Wrap pixels into an image.
  ///
  /// `pixels` must hold exactly `dims[1]` rows of `dims[0]` pixels.
  pub fn new(format: Format, dims: Dims, pixels: Vec<u8>) -> Result<Self, TextureError> {
    check_texels(format, dims, &pixels)?;

    let row_len = format.channels() * dims[0] as usize;
    if pixels.is_empty() && row_len != 0 && dims[1] != 0 {
      return Err(TextureError::RowCountMismatch {
        rows: 0,
        height: dims[1],
      });
    }

    Ok(Image {
      format,
      dims,
      pixels,
    })
  }

  /// Pixel format.
  pub fn format(&self) -> Format {
    self.format
  }

  /// Width and height, in pixels.
  pub fn dims(&self) -> Dims {
    self.dims
  }

  /// Raw pixel bytes.
  pub fn pixels(&self) -> &[u8] {
    &self.pixels
  }

  /// Consume the image and return its pixel bytes.
  pub fn into_pixels(self) -> Vec<u8> {
    self.pixels
  }

  /// Mirror the image upside down, in place.
  pub fn flip_vertical(&mut self) {
    let row_len = self.format.channels() * self.dims[0] as usize;

    if row_len == 0 {
      return;
    }

    let rows = self.pixels.len() / row_len;

    for top in 0..rows / 2 {
      let bottom = rows - 1 - top;
      let (head, tail) = self.pixels.split_at_mut(bottom * row_len);
      head[top * row_len..(top + 1) * row_len].swap_with_slice(&mut tail[..row_len]);
    }
  }
}

#[cfg(feature = "image")]
impl From<image::DynamicImage> for Image {
  fn from(img: image::DynamicImage) -> Self {
    use image::DynamicImage;

    let (format, dims, pixels) = match img {
      DynamicImage::ImageLuma8(buf) => (Format::Grey, [buf.width(), buf.height()], buf.into_raw()),
      DynamicImage::ImageLumaA8(buf) => (
        Format::GreyAlpha,
        [buf.width(), buf.height()],
        buf.into_raw(),
      ),
      DynamicImage::ImageRgb8(buf) => (Format::Rgb, [buf.width(), buf.height()], buf.into_raw()),
      DynamicImage::ImageRgba8(buf) => (Format::Rgba, [buf.width(), buf.height()], buf.into_raw()),
      // wider or reordered channels are converted to 8-bit RGBA
      other => {
        let buf = other.to_rgba8();
        (Format::Rgba, [buf.width(), buf.height()], buf.into_raw())
      }
    };

    Image {
      format,
      dims,
      pixels,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn channels() {
    assert_eq!(Format::Grey.channels(), 1);
    assert_eq!(Format::GreyAlpha.channels(), 2);
    assert_eq!(Format::Rgb.channels(), 3);
    assert_eq!(Format::Rgba.channels(), 4);
  }

  #[test]
  fn image_requires_full_pixel_data() {
    assert!(Image::new(Format::Grey, [2, 2], vec![0; 4]).is_ok());
    assert!(Image::new(Format::Grey, [2, 2], vec![0; 3]).is_err());
    assert!(Image::new(Format::Grey, [2, 2], Vec::new()).is_err());
    assert!(Image::new(Format::Rgb, [0, 0], Vec::new()).is_ok());
  }

  #[test]
  fn flip_vertical_odd_rows() {
    let mut img = Image::new(Format::GreyAlpha, [1, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    img.flip_vertical();
    assert_eq!(img.pixels(), &[5, 6, 3, 4, 1, 2]);
  }

  #[test]
  fn flip_vertical_even_rows() {
    let mut img = Image::new(Format::Grey, [2, 2], vec![1, 2, 3, 4]).unwrap();
    img.flip_vertical();
    assert_eq!(img.pixels(), &[3, 4, 1, 2]);
  }

  #[test]
  fn flip_vertical_twice_is_identity() {
    let pixels: Vec<u8> = (0..24).collect();
    let mut img = Image::new(Format::Rgba, [2, 3], pixels.clone()).unwrap();

    img.flip_vertical();
    img.flip_vertical();

    assert_eq!(img.into_pixels(), pixels);
  }

  #[cfg(feature = "image")]
  mod image_conversion {
    use super::super::*;
    use crate::texture::check_texels;
    use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb};

    fn assert_uploadable(img: &Image) {
      assert_eq!(check_texels(img.format(), img.dims(), img.pixels()), Ok(()));
    }

    #[test]
    fn luma8() {
      let buf = ImageBuffer::from_raw(3, 2, vec![1u8, 2, 3, 4, 5, 6]).unwrap();
      let img = Image::from(DynamicImage::ImageLuma8(buf));

      assert_eq!(img.format(), Format::Grey);
      assert_eq!(img.dims(), [3, 2]);
      assert_eq!(img.pixels(), &[1, 2, 3, 4, 5, 6]);
      assert_uploadable(&img);
    }

    #[test]
    fn luma_alpha8() {
      let buf: ImageBuffer<LumaA<u8>, _> = ImageBuffer::from_pixel(2, 2, LumaA([7, 200]));
      let img = Image::from(DynamicImage::ImageLumaA8(buf));

      assert_eq!(img.format(), Format::GreyAlpha);
      assert_eq!(img.pixels(), &[7, 200, 7, 200, 7, 200, 7, 200]);
      assert_uploadable(&img);
    }

    #[test]
    fn rgb8() {
      let buf: ImageBuffer<Rgb<u8>, _> = ImageBuffer::from_pixel(1, 3, Rgb([1, 2, 3]));
      let img = Image::from(DynamicImage::ImageRgb8(buf));

      assert_eq!(img.format(), Format::Rgb);
      assert_eq!(img.pixels().len(), 9);
      assert_uploadable(&img);
    }

    #[test]
    fn sixteen_bits_become_rgba8() {
      let buf: ImageBuffer<Luma<u16>, _> = ImageBuffer::from_pixel(3, 2, Luma([0xffff]));
      let img = Image::from(DynamicImage::ImageLuma16(buf));

      assert_eq!(img.format(), Format::Rgba);
      assert_eq!(img.dims(), [3, 2]);
      assert_eq!(img.pixels().len(), 3 * 2 * 4);
      assert!(img.pixels().iter().all(|&c| c == 0xff));
      assert_uploadable(&img);
    }
  }
}
