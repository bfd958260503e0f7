// Briquette quality assessment: one image in, a scored assessment out.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod actions;
pub mod flow;
pub mod handlers;
pub mod models;
pub mod prompts;
