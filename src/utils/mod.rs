pub mod natural;
pub mod path;

pub use natural::natural_cmp;
pub use path::{absolute_clean, file_name_lossy, split_extension};
