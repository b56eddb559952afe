//! Command implementations behind `main`.

mod serve;

pub use serve::serve;
