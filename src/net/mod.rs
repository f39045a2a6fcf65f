//! Network boundary: the contact form endpoint and asset probes.

pub mod api;
