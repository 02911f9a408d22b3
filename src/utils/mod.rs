// Utils compartidos

pub mod text;

pub use text::*;
