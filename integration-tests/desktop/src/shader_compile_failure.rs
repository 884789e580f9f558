//! A failing compilation reports the stage and leaves the current program alone.

use ruis_render::shader::{ProgramError, StageError, StageType};
use ruis_render_opengl::{assert_no_error, ShaderBase};

use crate::surface::Surface;

const VS: &str = "
attribute vec4 a0;

uniform mat4 matrix;

void main(void) {
  gl_Position = matrix * a0;
}
";

const FS: &str = "
#ifdef GL_ES
precision mediump float;
#endif

uniform vec4 uniform_color;

void main(void) {
  gl_FragColor = uniform_color;
}
";

const BAD_FS: &str = "
void main(void) {
  gl_FragColor = this_is_not_declared;
}
";

pub fn fixture() {
  let _surface = Surface::new("shader-compile-failure");

  let good = ShaderBase::new(VS, FS).expect("valid program");
  good.bind();
  assert!(good.is_bound());

  match ShaderBase::new(VS, BAD_FS) {
    Err(ProgramError::StageError(StageError::CompilationFailed(ty, _))) => {
      assert_eq!(ty, StageType::FragmentShader)
    }
    r => panic!("unexpected result: {:?}", r),
  }

  assert!(good.is_bound());

  assert!(good.uniform("uniform_color").is_ok());
  assert_eq!(
    good.uniform("not_a_uniform").unwrap_err(),
    ProgramError::UniformNotFound("not_a_uniform".to_owned())
  );

  // a matrix-less program cannot be used to render
  let e = ShaderBase::new("void main(void) { gl_Position = vec4(0.); }", FS).unwrap_err();
  assert_eq!(e, ProgramError::UniformNotFound("matrix".to_owned()));

  assert_no_error();
}
