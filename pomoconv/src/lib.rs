pub mod classify;
pub mod convert;
pub mod edges;
pub mod entry;
pub mod error;
pub mod extract;
pub mod sampler;
pub mod stats;
#[macro_use]
extern crate log;
