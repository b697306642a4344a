//! OLT aggregate

pub mod model;

pub use model::Olt;
