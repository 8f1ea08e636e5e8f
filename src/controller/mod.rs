pub mod ai;
pub mod jobs;
pub mod profile;
