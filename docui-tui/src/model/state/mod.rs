//! 面板内容状态

mod detail;
mod list;
mod navigate;

pub use detail::Detail;
pub use list::{format_size, ListRow, ResourceList};
pub use navigate::{key_hints, Navigate};
