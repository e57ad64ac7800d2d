pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod hydrator;
pub mod options;

#[cfg(test)]
pub(crate) mod test_utils;

pub use hypersim_common as common;
