//! Filesystem helpers shared by the artifact writers.

pub mod atomic_file;

pub use atomic_file::write_atomic;
