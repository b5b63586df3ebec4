pub mod boolean;
pub mod error;
pub mod format;
pub mod linear_algebra;
pub mod parse;
pub mod real;
