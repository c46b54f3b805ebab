// Pattern analysis over the recent alert window.
//
// `local` is the deterministic tally the feed recomputes on every alert.
// `remote` asks the generation endpoint for a richer summary over a
// timeframe and falls back to the local one.

pub mod local;
pub mod remote;
