//! Row aggregation and CSV output.

pub mod error;
pub mod table;
pub mod writer;
