//! Persistence for taskpad.
//!
//! Tasks live in a flat text file, one pipe-delimited line per task. The file
//! is read in full at startup and rewritten in full after every change.

pub mod codec;
mod file;

pub use codec::{decode, encode, try_decode};
pub use file::TaskFile;
