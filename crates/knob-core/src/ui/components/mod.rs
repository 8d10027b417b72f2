// src/ui/components/mod.rs
//! Leaf elements

pub mod button;
pub mod text;

pub use button::{Button, ButtonState};
pub use text::Text;
