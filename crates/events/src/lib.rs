pub mod events;

pub use events::files::{is_descendant, FileEvent, Fs};
