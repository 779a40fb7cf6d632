// Job description generation.
// Builds the prompt from the form fields and forwards it through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
