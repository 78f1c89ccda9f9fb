// Document adaptation: prompt templates, backend selection, template fallback,
// and the HTTP handlers for /generate, /generate-resume and /generate-both.
// Hosted-model calls go through llm_client via the backends module only.

pub mod backends;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
