#[macro_use]
extern crate log;

pub mod io;
pub mod tree;
