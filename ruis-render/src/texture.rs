//! Texture API.

use std::error;
use std::fmt;

use crate::pixel::{Format, Image};

/// Width and height of a texture, in pixels.
pub type Dims = [u32; 2];

/// Texture filter, used for both minification and magnification.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Filter {
  /// Nearest interpolation.
  Nearest,
  /// Linear interpolation between surrounding pixels.
  Linear,
}

/// How mipmaps are selected while minifying.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mipmap {
  /// No mipmaps are generated nor sampled.
  None,
  /// Sample the nearest mipmap level.
  Nearest,
  /// Linearly interpolate between the two nearest mipmap levels.
  Linear,
}

/// Sampling parameters of a 2D texture.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TextureParams {
  /// Minification filter.
  pub min_filter: Filter,
  /// Magnification filter.
  pub mag_filter: Filter,
  /// Mipmapping mode.
  ///
  /// Mipmaps are only generated for textures created with initial pixel data.
  pub mipmap: Mipmap,
}

impl Default for TextureParams {
  /// Linear filtering, no mipmaps.
  fn default() -> Self {
    TextureParams {
      min_filter: Filter::Linear,
      mag_filter: Filter::Linear,
      mipmap: Mipmap::None,
    }
  }
}

/// Errors that might happen when creating textures.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TextureError {
  /// The pixel data length is not a whole number of rows.
  RowSizeMismatch {
    /// Length of the pixel data, in bytes.
    len: usize,
    /// Length of a row, in bytes.
    row_len: usize,
  },
  /// The pixel data does not hold as many rows as the texture is high.
  RowCountMismatch {
    /// Number of rows in the pixel data.
    rows: usize,
    /// Height of the texture.
    height: u32,
  },
  /// The faces of a cube texture do not all share the same format and dimensions.
  CubeFaceMismatch,
}

impl fmt::Display for TextureError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      TextureError::RowSizeMismatch { len, row_len } => write!(
        f,
        "pixel data of {} bytes is not a multiple of the row length ({} bytes)",
        len, row_len
      ),

      TextureError::RowCountMismatch { rows, height } => write!(
        f,
        "pixel data holds {} rows, texture height is {}",
        rows, height
      ),

      TextureError::CubeFaceMismatch => {
        f.write_str("cube texture faces differ in format or dimensions")
      }
    }
  }
}

impl error::Error for TextureError {}

/// Check that `texels` fits a texture of format `format` and dimensions `dims`.
///
/// Empty texels are always accepted: they stand for uninitialized storage. Otherwise `texels` must
/// be exactly `dims[1]` rows of `dims[0]` pixels.
pub fn check_texels(format: Format, dims: Dims, texels: &[u8]) -> Result<(), TextureError> {
  if texels.is_empty() {
    return Ok(());
  }

  let row_len = format.channels() * dims[0] as usize;

  if row_len == 0 || texels.len() % row_len != 0 {
    return Err(TextureError::RowSizeMismatch {
      len: texels.len(),
      row_len,
    });
  }

  let rows = texels.len() / row_len;
  if rows != dims[1] as usize {
    return Err(TextureError::RowCountMismatch {
      rows,
      height: dims[1],
    });
  }

  Ok(())
}

/// 2D color texture.
pub trait Texture2d {
  /// Pixel format the texture was created with.
  fn format(&self) -> Format;

  /// Dimensions of the texture.
  fn dims(&self) -> Dims;
}

/// Depth texture, usable as a frame buffer depth attachment.
pub trait TextureDepth {
  /// Dimensions of the texture.
  fn dims(&self) -> Dims;
}

/// Stencil texture, usable as a frame buffer stencil attachment.
pub trait TextureStencil {
  /// Dimensions of the texture.
  fn dims(&self) -> Dims;
}

/// Cube texture.
pub trait TextureCube {
  /// Dimensions of every face.
  fn face_dims(&self) -> Dims;
}

/// The six faces of a cube texture.
///
/// The y axis of texture coordinates points downwards, so a backend whose y axis points upwards
/// swaps the two y faces when uploading.
#[derive(Clone, Debug)]
pub struct CubeFaces {
  /// Face at +x.
  pub positive_x: Image,
  /// Face at -x.
  pub negative_x: Image,
  /// Face at +y.
  pub positive_y: Image,
  /// Face at -y.
  pub negative_y: Image,
  /// Face at +z.
  pub positive_z: Image,
  /// Face at -z.
  pub negative_z: Image,
}

impl CubeFaces {
  /// Faces in the +x, -x, +y, -y, +z, -z order.
  pub fn into_array(self) -> [Image; 6] {
    [
      self.positive_x,
      self.negative_x,
      self.positive_y,
      self.negative_y,
      self.positive_z,
      self.negative_z,
    ]
  }

  /// Check that all faces share the same format and dimensions.
  pub fn check(&self) -> Result<(), TextureError> {
    let faces = [
      &self.positive_x,
      &self.negative_x,
      &self.positive_y,
      &self.negative_y,
      &self.positive_z,
      &self.negative_z,
    ];

    let first = faces[0];
    if faces
      .iter()
      .all(|face| face.format() == first.format() && face.dims() == first.dims())
    {
      Ok(())
    } else {
      Err(TextureError::CubeFaceMismatch)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_texels_are_accepted() {
    assert_eq!(check_texels(Format::Rgba, [64, 32], &[]), Ok(()));
    assert_eq!(check_texels(Format::Grey, [0, 0], &[]), Ok(()));
  }

  #[test]
  fn partial_row_is_rejected() {
    assert_eq!(
      check_texels(Format::Rgb, [4, 2], &[0; 13]),
      Err(TextureError::RowSizeMismatch {
        len: 13,
        row_len: 12
      })
    );
  }

  #[test]
  fn missing_rows_are_rejected() {
    assert_eq!(
      check_texels(Format::GreyAlpha, [3, 4], &[0; 18]),
      Err(TextureError::RowCountMismatch { rows: 3, height: 4 })
    );
  }

  #[test]
  fn zero_width_with_data_is_rejected() {
    assert!(check_texels(Format::Grey, [0, 4], &[0; 4]).is_err());
  }

  #[test]
  fn exact_texels_are_accepted() {
    assert_eq!(check_texels(Format::Grey, [3, 5], &[0; 15]), Ok(()));
    assert_eq!(check_texels(Format::Rgba, [1, 1], &[0; 4]), Ok(()));
  }

  #[test]
  fn default_params() {
    let params = TextureParams::default();

    assert_eq!(params.min_filter, Filter::Linear);
    assert_eq!(params.mag_filter, Filter::Linear);
    assert_eq!(params.mipmap, Mipmap::None);
  }

  fn face(format: Format, side: u32) -> Image {
    let len = format.channels() * (side * side) as usize;
    Image::new(format, [side, side], vec![0; len]).unwrap()
  }

  #[test]
  fn cube_faces_must_match() {
    let faces = CubeFaces {
      positive_x: face(Format::Rgb, 2),
      negative_x: face(Format::Rgb, 2),
      positive_y: face(Format::Rgb, 2),
      negative_y: face(Format::Rgb, 2),
      positive_z: face(Format::Rgb, 2),
      negative_z: face(Format::Rgb, 2),
    };
    assert_eq!(faces.check(), Ok(()));

    let faces = CubeFaces {
      negative_z: face(Format::Rgba, 2),
      ..faces
    };
    assert_eq!(faces.check(), Err(TextureError::CubeFaceMismatch));
  }
}
