pub mod config;
pub mod courses;
pub mod init;
pub mod run;
