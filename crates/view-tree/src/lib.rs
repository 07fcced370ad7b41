pub mod color;
pub mod error;
pub mod events;
pub mod keyboard;
pub mod view;
pub mod walk;

pub use color::Color;
pub use error::{Result, TreeError};
pub use events::{ClickRouter, Screen};
pub use keyboard::SoftKeyboard;
pub use view::{View, ViewId, ViewKind, ViewTree};
pub use walk::{walk, walk_matching, Dfs};
