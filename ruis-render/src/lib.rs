//! # Abstract rendering interface of the ruis GUI toolkit
//!
//! This crate describes _what_ the toolkit needs from a renderer, without saying anything about _how_
//! it is done. It contains no graphics API calls at all: only plain data types and the traits a
//! rendering backend must implement.
//!
//! A backend provides:
//!
//! - **Textures**: 2D textures created from raw 8-bit pixels or from an [`Image`](pixel::Image),
//!   depth textures and stencil textures used as frame buffer attachments, and cube textures.
//! - **Buffers**: vertex buffers made of 1 to 4 `f32` components per vertex and index buffers made
//!   of 16-bit or 32-bit indices. Buffers are written once, at creation, and are immutable
//!   afterwards; the toolkit regenerates them on every layout pass instead of streaming into them.
//! - **Vertex arrays**: a list of vertex buffers, an index buffer and a primitive [`Mode`].
//! - **Frame buffers**: offscreen render targets made of texture attachments.
//! - **Shaders**: a fixed set of shader variants, see [`Shaders`](shader::Shaders).
//! - **Global render state**: viewport, scissor, blending and depth test, exposed through the
//!   [`Context`](context::Context) trait.
//!
//! # On context and threads
//!
//! Everything here is single-threaded. A context and the resources it creates are bound to the
//! thread the rendering context is current on; backends are expected to be `!Send` and `!Sync`.
//!
//! # Feature flags
//!
//! - `image`: conversion from the [image](https://crates.io/crates/image) crate’s `DynamicImage` into
//!   [`Image`](pixel::Image).
//!
//! [`Mode`]: vertex_array::Mode

#![deny(missing_docs)]

pub mod blending;
pub mod buffer;
pub mod context;
pub mod framebuffer;
pub mod matrix;
pub mod pixel;
pub mod rect;
pub mod shader;
pub mod texture;
pub mod vertex_array;
