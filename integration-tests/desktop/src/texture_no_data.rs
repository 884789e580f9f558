//! Textures created without pixels allocate uninitialized storage, whatever their parameters.

use ruis_render::context::Context as _;
use ruis_render::pixel::{Format, Image};
use ruis_render::texture::{Filter, Mipmap, Texture2d as _, TextureDepth as _, TextureParams};
use ruis_render_opengl::assert_no_error;

use crate::surface::Surface;

pub fn fixture() {
  let surface = Surface::new("texture-no-data");
  let ctx = &surface.context;

  for &format in &[Format::Grey, Format::GreyAlpha, Format::Rgb, Format::Rgba] {
    let params = TextureParams {
      min_filter: Filter::Nearest,
      mag_filter: Filter::Nearest,
      // no pixels, so no mipmaps are generated
      mipmap: Mipmap::Linear,
    };

    let texture = ctx
      .make_texture_2d(format, [64, 32], &[], params)
      .expect("texture without pixels");

    assert_eq!(texture.format(), format);
    assert_eq!(texture.dims(), [64, 32]);
    assert_no_error();
  }

  let depth = ctx.make_texture_depth([64, 32]);
  assert_eq!(depth.dims(), [64, 32]);
  assert_no_error();

  let image = Image::new(Format::Rgb, [2, 2], vec![0xff; 12]).expect("image");
  let texture = ctx
    .make_texture_2d_from_image(image, TextureParams::default())
    .expect("texture from image");
  assert_eq!(texture.dims(), [2, 2]);
  assert!(ctx.max_texture_size() >= 64);
  assert_no_error();
}
