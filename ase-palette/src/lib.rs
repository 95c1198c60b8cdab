#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod color;
pub mod error;
pub mod gpl;
pub mod palette;
pub mod stream;
