//! Draws the unit square with every shader variant into an offscreen frame buffer.

use gl::types::*;
use ruis_render::context::Context as _;
use ruis_render::pixel::Format;
use ruis_render::rect::Rect;
use ruis_render::texture::TextureParams;
use ruis_render::vertex_array::Mode;
use ruis_render_opengl::assert_no_error;
use std::rc::Rc;

use crate::surface::Surface;

const SIDE: u32 = 16;

// counterclockwise on screen, the initial matrix flips the y axis
const QUAD_POS: [[f32; 2]; 4] = [[0., 0.], [1., 0.], [1., 1.], [0., 1.]];
const QUAD_INDICES: [u16; 6] = [0, 3, 2, 0, 2, 1];

fn read_center_pixel() -> [u8; 4] {
  let mut pixel = [0u8; 4];
  let center = (SIDE / 2) as GLint;

  unsafe {
    gl::ReadPixels(
      center,
      center,
      1,
      1,
      gl::RGBA,
      gl::UNSIGNED_BYTE,
      pixel.as_mut_ptr() as *mut GLvoid,
    );
  }
  assert_no_error();

  pixel
}

// drivers may round channel products either way
fn assert_pixel_near(pixel: [u8; 4], expected: [u8; 4]) {
  let near = pixel
    .iter()
    .zip(&expected)
    .all(|(&p, &e)| (p as i16 - e as i16).abs() <= 1);

  assert!(near, "pixel {:?}, expected {:?}", pixel, expected);
}

pub fn fixture() {
  let surface = Surface::new("unit-square");
  let ctx = &surface.context;

  let shaders = ctx.make_shaders().expect("shaders");
  let matrix = ctx.initial_matrix();

  let target = Rc::new(
    ctx
      .make_texture_2d(Format::Rgba, [SIDE, SIDE], &[], TextureParams::default())
      .expect("render target"),
  );
  let fb = ctx
    .make_frame_buffer(Some(target), None, None)
    .expect("frame buffer");

  ctx.set_frame_buffer(Some(&fb));
  ctx.set_viewport(Rect::new(0, 0, SIDE, SIDE));

  let pos = Rc::new(ctx.make_vertex_buffer(&QUAD_POS));
  let indices = Rc::new(ctx.make_index_buffer(&QUAD_INDICES));
  let square = ctx.make_vertex_array(vec![pos.clone()], indices.clone(), Mode::Triangles);

  ctx.clear_frame_buffer_color();
  assert_eq!(read_center_pixel(), [0, 0, 0, 0]);

  shaders
    .color_pos
    .render(&matrix, &square, [1., 0., 0., 1.]);
  assert_eq!(read_center_pixel(), [255, 0, 0, 255]);

  // per-vertex colors, all green
  let colors = Rc::new(ctx.make_vertex_buffer(&[[0f32, 1., 0., 1.]; 4]));
  let colored_square = ctx.make_vertex_array(
    vec![pos.clone(), colors],
    indices.clone(),
    Mode::Triangles,
  );

  ctx.clear_frame_buffer_color();
  shaders.pos_clr.render(&matrix, &colored_square);
  assert_eq!(read_center_pixel(), [0, 255, 0, 255]);

  // textured with a single blue texel
  let tex_coords = Rc::new(ctx.make_vertex_buffer(&QUAD_POS));
  let textured_square = ctx.make_vertex_array(
    vec![pos, tex_coords],
    indices,
    Mode::Triangles,
  );
  let blue = ctx
    .make_texture_2d(Format::Rgba, [1, 1], &[0, 0, 255, 255], TextureParams::default())
    .expect("blue texture");

  ctx.clear_frame_buffer_color();
  shaders.pos_tex.render(&matrix, &textured_square, &blue);
  assert_eq!(read_center_pixel(), [0, 0, 255, 255]);

  ctx.clear_frame_buffer_color();
  shaders
    .color_pos_tex
    .render(&matrix, &textured_square, [1., 1., 1., 1.], &blue);
  assert_eq!(read_center_pixel(), [0, 0, 255, 255]);

  // single-channel textures only modulate alpha; blending is off so alpha is written as is
  let grey = ctx
    .make_texture_2d(Format::Grey, [1, 1], &[0x80], TextureParams::default())
    .expect("grey texture");

  ctx.clear_frame_buffer_color();
  shaders
    .color_pos_tex_alpha
    .render(&matrix, &textured_square, [1., 0., 0., 1.], &grey);
  assert_pixel_near(read_center_pixel(), [255, 0, 0, 128]);

  ctx.clear_frame_buffer_color();
  shaders
    .color_pos_lum
    .render(&matrix, &textured_square, [1., 0., 0., 0.5], &grey);
  assert_pixel_near(read_center_pixel(), [255, 0, 0, 64]);

  // grey-alpha reads back as luminance in rgb and its second channel in alpha
  let grey_alpha = ctx
    .make_texture_2d(Format::GreyAlpha, [1, 1], &[0x80, 0x40], TextureParams::default())
    .expect("grey-alpha texture");

  ctx.clear_frame_buffer_color();
  shaders
    .color_pos_tex
    .render(&matrix, &textured_square, [1., 1., 1., 1.], &grey_alpha);
  assert_pixel_near(read_center_pixel(), [128, 128, 128, 64]);

  ctx.clear_frame_buffer_color();
  shaders.pos_tex.render(&matrix, &textured_square, &grey);
  assert_pixel_near(read_center_pixel(), [128, 128, 128, 255]);

  ctx.set_frame_buffer(None);
  assert_no_error();
}
