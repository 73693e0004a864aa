// Analyze / Rewrite API
// Placeholder results only: request shapes and the API key gate are final,
// scoring and rewriting are not implemented yet.

pub mod handlers;
pub mod models;
