pub mod course;
pub mod record;
pub mod session;
pub mod station;
