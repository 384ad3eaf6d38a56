pub mod set_ops;
pub mod window;

pub use set_ops::{intersect, subtract};
pub use window::{format_window_list, parse_window_list, WindowId, WindowList};
