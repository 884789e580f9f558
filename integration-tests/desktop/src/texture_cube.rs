use ruis_render::context::Context as _;
use ruis_render::pixel::{Format, Image};
use ruis_render::texture::{CubeFaces, TextureCube as _, TextureError, TextureStencil as _};
use ruis_render_opengl::assert_no_error;

use crate::surface::Surface;

fn face(format: Format, side: u32) -> Image {
  let len = format.channels() * (side * side) as usize;
  Image::new(format, [side, side], vec![0x80; len]).expect("face")
}

fn faces(format: Format, side: u32) -> CubeFaces {
  CubeFaces {
    positive_x: face(format, side),
    negative_x: face(format, side),
    positive_y: face(format, side),
    negative_y: face(format, side),
    positive_z: face(format, side),
    negative_z: face(format, side),
  }
}

pub fn fixture() {
  let surface = Surface::new("texture-cube");
  let ctx = &surface.context;

  for &format in &[Format::Grey, Format::GreyAlpha, Format::Rgb, Format::Rgba] {
    let cube = ctx
      .make_texture_cube(faces(format, 4))
      .expect("cube texture");
    assert_eq!(cube.face_dims(), [4, 4]);
    assert_no_error();
  }

  let mismatched = CubeFaces {
    negative_y: face(Format::Rgb, 2),
    ..faces(Format::Rgb, 4)
  };
  assert_eq!(
    ctx.make_texture_cube(mismatched).unwrap_err(),
    TextureError::CubeFaceMismatch
  );

  let stencil = ctx.make_texture_stencil([16, 16]);
  assert_eq!(stencil.dims(), [16, 16]);
  assert_no_error();
}
