// Scoring: pure functions over text and analysis results.
//
// Nothing in here does I/O. The sentiment scorer is lexicon-based and the
// risk classifier is a fixed linear formula with threshold bands.

pub mod risk;
pub mod sentiment;
