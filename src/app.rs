pub mod core;
pub mod settings;
pub mod types;

pub use core::panel::Panel;
pub use core::App;
pub use types::{Focus, Mode};
