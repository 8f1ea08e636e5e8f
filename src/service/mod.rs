pub mod ai;
pub mod jobs;
