use ruis_render::context::Context as _;
use ruis_render::rect::Rect;
use ruis_render_opengl::assert_no_error;

use crate::surface::Surface;

pub fn fixture() {
  let surface = Surface::new("window-coords");
  let ctx = &surface.context;

  let viewport = Rect::new(0, 0, 100, 50);
  ctx.set_viewport(viewport);
  assert_eq!(ctx.viewport(), viewport);

  assert_eq!(ctx.to_window_coords([-1., -1.]), [0, 0]);
  assert_eq!(ctx.to_window_coords([1., 1.]), [100, 50]);
  assert_eq!(ctx.to_window_coords([0., 0.]), [50, 25]);

  let viewport = Rect::new(20, 10, 100, 50);
  ctx.set_viewport(viewport);
  assert_eq!(ctx.to_window_coords([-1., -1.]), [20, 10]);
  assert_eq!(ctx.to_window_coords([1., 1.]), [120, 60]);

  assert_no_error();
}
