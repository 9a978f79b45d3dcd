//! Big-endian codecs for fixed-width primitives.
//!
//! This module defines how each primitive kind maps to raw bytes. It is an
//! implementation detail and not part of the public API.

mod primitive;

pub(crate) use primitive::Primitive;
