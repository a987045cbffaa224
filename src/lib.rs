pub mod batch;
pub mod error;
pub mod mdx;
pub mod options;
pub mod validate;
mod utils;
