// src/fs/mod.rs

//! Filesystem helpers used by the packaging pipeline.
//!
//! - [`dirs`] creates, clears and copies directory trees.
//! - [`scope`] provides [`DirScope`], the only sanctioned way this crate
//!   changes the process working directory.

pub mod dirs;
pub mod scope;

pub use dirs::{clean_dir, copy_tree, ensure_dir};
pub use scope::DirScope;
