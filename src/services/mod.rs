pub mod activation;
pub mod fallback_runner;
pub mod journal;
pub mod window_controller;

pub use activation::{activate_next, Activation};
pub use fallback_runner::{FallbackOutcome, FallbackRunner};
pub use journal::Journal;
pub use window_controller::{create_window_controller, SearchFilter, WindowController};
