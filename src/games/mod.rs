//! Game implementations.

pub mod scramble;
