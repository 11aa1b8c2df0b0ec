//! Algebraic data types.
mod these;

pub use these::These;
