//! In-memory model for NBT values attached to block actors.
//!
//! The wire codec that reads and writes these values lives outside this
//! workspace; everything here operates on already-decoded tags.

pub mod tag;

pub use tag::{compound_snbt, NbtCompound, NbtTag};
