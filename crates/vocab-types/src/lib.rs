pub mod types;

pub use types::{CefrLevel, VocabEntry};
