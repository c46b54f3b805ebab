// MindfulAI Monitor: content risk scoring and harassment alerting.
//
// This is the library root. Each module corresponds to one stage of the
// monitoring pipeline or one of its outer surfaces.

pub mod analysis;
pub mod config;
pub mod feed;
pub mod generation;
pub mod models;
pub mod output;
pub mod patterns;
pub mod pipeline;
pub mod scoring;
pub mod status;
pub mod support;

#[cfg(feature = "web")]
pub mod web;
