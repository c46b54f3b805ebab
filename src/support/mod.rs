// Support matching: therapist suggestions for people dealing with online
// harassment.
//
// Profiles come from the generation endpoint and are sanitized to a short
// list of verified platforms. When generation is unavailable the built-in
// directory is ranked locally instead. `progress` turns weekly recovery
// scores into short insights.

pub mod directory;
pub mod progress;
pub mod therapists;
