//! Constants shared by utility primitives

pub mod hash;
