pub mod buffer;
pub mod command;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod history;
pub mod io;
pub mod traits;
pub mod types;

pub use crate::buffer::{Buffer, Snapshot};
pub use crate::command::Command;
pub use crate::config::{CursorRestore, EditorConfig};
pub use crate::editor::{Editor, EditorBuilder, EditorSnapshot};
pub use crate::error::EditError;
pub use crate::history::History;
pub use crate::traits::TextOps;
pub use crate::types::{Changes, Cursor, Direction, Outcome};
