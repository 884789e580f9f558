//! Hidden GLFW window hosting an OpenGL context for the fixtures.

use glfw::{Context as _, Glfw, Window, WindowEvent};
use ruis_render::context::NativeWindow;
use ruis_render_opengl::Context;
use std::cell::RefCell;
use std::os::raw::c_void;
use std::rc::Rc;
use std::sync::mpsc::Receiver;

pub struct GlfwWindow {
  window: RefCell<Window>,
  _events_rx: Receiver<(f64, WindowEvent)>,
}

impl NativeWindow for GlfwWindow {
  fn bind_rendering_context(&self) {
    self.window.borrow_mut().make_current();
  }
}

pub struct Surface {
  // declared first so that it's dropped before the window
  pub context: Context,
  pub window: Rc<GlfwWindow>,
  pub glfw: Glfw,
}

impl Surface {
  pub fn new(title: &str) -> Self {
    let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS).expect("GLFW initialization");

    // legacy GLSL needs a compatibility context
    glfw.window_hint(glfw::WindowHint::ContextVersion(2, 1));
    glfw.window_hint(glfw::WindowHint::Visible(false));

    let (mut window, events_rx) = glfw
      .create_window(128, 128, title, glfw::WindowMode::Windowed)
      .expect("GLFW window");

    window.make_current();
    gl::load_with(|s| window.get_proc_address(s) as *const c_void);

    let window = Rc::new(GlfwWindow {
      window: RefCell::new(window),
      _events_rx: events_rx,
    });

    let context = Context::new(window.clone()).expect("OpenGL context");

    Surface {
      context,
      window,
      glfw,
    }
  }
}
