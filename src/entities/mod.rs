pub mod job;
pub mod user;

pub use job::{Job, JobCategory, JobType};
pub use user::{User, UserRole};
