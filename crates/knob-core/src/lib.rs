//! Hardware-independent core library for knob-ui
//!
//! This crate contains the layout and selection engine for small embedded
//! displays driven by a rotary potentiometer and a single push button:
//! a declarative view tree, stack/overlay layout, the selection registry,
//! the dial-to-index mapper and the frame driver that ties them together.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod driver;
pub mod feedback;
pub mod framebuffer;
pub mod geometry;
pub mod input;
pub mod selection;
pub mod ui;

pub use config::{ConfigError, FeedbackConfig, FontConfig, InputConfig, UiConfig};
pub use driver::{DriverError, FrameDriver, FrameReport, Hardware, Screen};
pub use selection::SelectionRegistry;
