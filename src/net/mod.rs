//! Network boundary: wire types and REST helpers.

pub mod api;
pub mod types;
