pub mod jobs;

pub use jobs::{meta_routes, routes};
