// Remote analysis: the calls the monitoring pipeline and the chat surface
// make to the generation endpoint. Each exposes a Result-returning fetch
// boundary and a consumer-facing method that applies the fallback.

pub mod actions;
pub mod content;
pub mod emergency;
