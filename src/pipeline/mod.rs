// Pipelines that turn submitted content into recorded alerts.
//
// monitor: one submission, analyze -> classify -> recommend -> record.
// batch: many independent submissions in flight at once.

pub mod batch;
pub mod monitor;
