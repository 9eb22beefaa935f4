//! Core value objects shared across the domain

pub mod model;
pub mod topic;

pub use model::Model;
pub use topic::Topic;
