//! A parser for markdownish, a small and permissive dialect of markdown.
//!
//! Input is divided into lines, the lines into sections at blank lines, and
//! each section is parsed into a tree of blocks by matching the markers at
//! the front of each line against the blocks still open. Sections are
//! independent of each other and so are parsed concurrently.

#[macro_use]
mod regex;

pub mod language;
pub mod parallel;
pub mod parsing;
pub mod rendering;
