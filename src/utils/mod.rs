pub mod read_time;
pub mod slug;

pub use read_time::estimate_read_time;
pub use slug::slugify;
