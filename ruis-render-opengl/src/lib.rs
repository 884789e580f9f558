//! # OpenGL backend of the ruis renderer
//!
//! This crate implements the [ruis-render](ruis_render) interface with OpenGL 2.0 and later, using
//! the [gl](https://crates.io/crates/gl) bindings. Nearly every operation maps onto a handful of
//! OpenGL calls, each followed by an error check.
//!
//! # Creating a context
//!
//! This crate doesn’t create windows nor OpenGL contexts. The windowing layer creates both, makes
//! the OpenGL context current, loads the OpenGL functions with [`gl::load_with`] and hands the
//! window over to [`Context::new`] as a [`NativeWindow`](ruis_render::context::NativeWindow).
//!
//! Shaders are written in legacy GLSL (no `#version` directive), so a compatibility profile is
//! required with OpenGL 3.2 and later.
//!
//! # Error checking
//!
//! OpenGL errors are polled after every call and turned into panics, see [`assert_no_error`]. That
//! only happens in debug builds, unless the `check-errors` feature is enabled. Debug builds also
//! forward driver debug messages to the [log](https://crates.io/crates/log) facade when
//! `GL_KHR_debug` is available.
//!
//! # Feature flags
//!
//! - `check-errors`: check for OpenGL errors in release builds too.

#![deny(missing_docs)]

mod buffer;
mod context;
mod error;
mod framebuffer;
mod shader;
mod state;
mod texture;
mod vertex_array;

pub use self::buffer::{IndexBuffer, VertexBuffer};
pub use self::context::Context;
pub use self::error::{assert_no_error, GlError};
pub use self::framebuffer::FrameBuffer;
pub use self::shader::{ColorPosShader, ColorPosTexShader, PosClrShader, PosTexShader, ShaderBase};
pub use self::state::{ContextError, Extensions, GlState, Version};
pub use self::texture::{Texture2d, TextureCube, TextureDepth, TextureStencil};
pub use self::vertex_array::VertexArray;
