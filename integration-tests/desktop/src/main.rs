use colored::Colorize as _;

mod surface;

macro_rules! tests {
  ($($name:expr, $module:ident),*) => {
    // declare the modules for all tests
    $(
      mod $module;
    )*

    // list of all available integration tests
    const TEST_NAMES: &[&str] = &[$( $name ),*];

    // run a given test
    fn run_test(name: &str) {
      $(
        if name == $name {
          $module::fixture();
          return;
        }
      )*

      else {
        println!("{} is not a valid test. Possible values", name.red());

        for test_name in TEST_NAMES {
          println!("  -> {}", test_name.blue());
        }
      }
    }
  }
}

tests! {
  "texture-no-data", texture_no_data,
  "texture-bad-data", texture_bad_data,
  "texture-cube", texture_cube,
  "buffer-arity", buffer_arity,
  "frame-buffer-completeness", frame_buffer_completeness,
  "shader-compile-failure", shader_compile_failure,
  "scissor-test", scissor,
  "window-coords", window_coords,
  "unit-square", unit_square
}

fn main() {
  env_logger::init();

  let test_name = std::env::args().skip(1).next();

  if let Some(test_name) = test_name {
    println!("test name: {}", test_name.green());

    run_test(&test_name);
  } else {
    println!("Please provide a test name. Possible values");

    for test_name in TEST_NAMES {
      println!("  -> {}", test_name.blue());
    }
  }
}
