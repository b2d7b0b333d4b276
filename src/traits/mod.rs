pub mod app;
pub mod frame;
pub mod presenter;

pub use app::*;
pub use frame::*;
pub use presenter::*;
