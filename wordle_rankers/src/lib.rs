#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod rankers;

pub mod util;

pub use rankers::*;
