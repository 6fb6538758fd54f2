//! Main module for mindmark library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;

pub use lexing::tokenize;
pub use parsing::{parse, Document};
