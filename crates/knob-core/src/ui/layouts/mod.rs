// src/ui/layouts/mod.rs
//! Containers arranging child views

pub mod overlay;
pub mod stack;

pub use overlay::ZStack;
pub use stack::{HStack, Horizontal, Stack, StackAxis, VStack, Vertical};
