pub mod table;
pub mod time;

pub use time::{format_swipe_timestamp, section_label};
