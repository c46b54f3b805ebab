pub mod alerts;
pub mod analyze;
pub mod emergency;
pub mod insights;
pub mod patterns;
pub mod therapists;
