// Text generation: trait-based abstraction over the remote LLM endpoint.
//
// Every feature that talks to the language model goes through the
// TextGenerator trait, so the analyzers can be handed a fake in tests and a
// DisabledGenerator when no API key is configured.

pub mod cohere;
pub mod json;
pub mod traits;
