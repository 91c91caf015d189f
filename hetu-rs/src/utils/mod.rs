//! Shared utilities for the hetu-rs CLI

pub mod format;
pub mod io;
pub mod table;
pub mod tree;

pub use format::*;
pub use io::*;
pub use table::*;
pub use tree::*;
