// src/ui/mod.rs
//! Declarative UI for dial-driven displays
//!
//! This module provides:
//! - A view tree rebuilt every frame ([`View`])
//! - Leaf elements (text, buttons carrying intents)
//! - Stack and overlay containers with alignment and spacing
//! - Layout passes that position leaves and number interactive slots
//! - Theme, palette and font resolution shared by every element

pub mod components;
pub mod core;
pub mod fonts;
pub mod layout;
pub mod layouts;
pub mod styling;
pub mod view;

// Re-export commonly used items
pub use components::{Button, ButtonState, Text};
pub use self::core::{Alignment, Axis, Environment};
pub use fonts::{FontResolver, MonoFontBook};
pub use layout::{Element, PassCursor, Placed, arrange, collect, measure, paint};
pub use layouts::{HStack, VStack, ZStack};
pub use styling::{ColorPalette, Theme};
pub use view::{Group, View};
