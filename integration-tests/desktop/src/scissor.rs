use ruis_render::blending::Factor;
use ruis_render::context::Context as _;
use ruis_render::rect::Rect;
use ruis_render_opengl::assert_no_error;

use crate::surface::Surface;

pub fn fixture() {
  let surface = Surface::new("scissor-test");
  let ctx = &surface.context;

  assert!(!ctx.is_scissor_enabled());
  ctx.enable_scissor(true);
  assert!(ctx.is_scissor_enabled());

  let rect = Rect::new(10, 20, 30, 40);
  ctx.set_scissor(rect);
  assert_eq!(ctx.scissor(), rect);

  ctx.enable_scissor(false);
  assert!(!ctx.is_scissor_enabled());
  // disabling the test keeps the box
  assert_eq!(ctx.scissor(), rect);

  assert!(!ctx.is_depth_enabled());
  ctx.enable_depth(true);
  assert!(ctx.is_depth_enabled());
  ctx.enable_depth(false);
  assert!(!ctx.is_depth_enabled());

  ctx.enable_blend(true);
  ctx.set_blend_func(
    Factor::SrcAlpha,
    Factor::OneMinusSrcAlpha,
    Factor::One,
    Factor::OneMinusSrcAlpha,
  );
  ctx.enable_blend(false);

  assert_no_error();
}
