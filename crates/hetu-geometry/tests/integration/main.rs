//! Integration tests for hetu-geometry

mod catalog;
mod modes;
mod scene;
mod sequence;
