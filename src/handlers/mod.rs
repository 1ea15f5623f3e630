// handlers/mod.rs - endpoint adapters grouped by auth tier
//
// Public (no token) → reads, health and service info
// Protected (Authorization token) → product creation

pub mod protected;
pub mod public;
