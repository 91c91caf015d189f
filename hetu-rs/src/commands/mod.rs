//! Command implementations

pub mod catalog;
pub mod circuit;
pub mod modes;
pub mod sequence;
pub mod simulate;
pub mod tree;
