pub mod content;
pub mod root;
