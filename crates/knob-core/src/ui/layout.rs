// src/ui/layout.rs
//! Layout passes over a [`View`] tree
//!
//! A frame goes through three independent walks of the same tree:
//!
//! - [`collect`] registers every enabled button with the selection registry
//!   in document order.
//! - [`arrange`] resolves every leaf to an absolute rectangle and numbers the
//!   enabled buttons in the same order.
//! - [`paint`] draws the arranged leaves, highlighting the selected one.
//!
//! The button ordinal comes from a cursor created fresh for each pass, so
//! the numbering seen while painting always matches the registry slots.

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::geometry::resolve_size;
use crate::selection::SelectionRegistry;
use crate::ui::components::{Button, ButtonState, Text};
use crate::ui::core::Environment;
use crate::ui::view::{View, visit_flat};

/// Hands out button ordinals in visit order.
#[derive(Debug, Default)]
pub struct PassCursor {
    next: usize,
}

impl PassCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self) -> usize {
        let ordinal = self.next;
        self.next += 1;
        ordinal
    }
}

/// Leaf resolved by [`arrange`].
#[derive(Debug)]
pub enum Element<'v, A> {
    Text(&'v Text),
    /// `ordinal` is the selection slot index; `None` for disabled buttons.
    Button {
        button: &'v Button<A>,
        ordinal: Option<usize>,
    },
}

/// A leaf together with its absolute rectangle.
#[derive(Debug)]
pub struct Placed<'v, A> {
    pub frame: Rectangle,
    pub element: Element<'v, A>,
}

/// State threaded through one arrange walk.
pub(crate) struct Pass<'v, A> {
    cursor: PassCursor,
    placed: Vec<Placed<'v, A>>,
}

/// Natural rectangle of `view`, `None` for transparent groups.
///
/// Stacks and overlays without an explicit frame report their intrinsic
/// rectangle; the empty placeholder reports a zero rectangle.
pub fn measure<A>(view: &View<A>, env: &Environment<'_>) -> Option<Rectangle> {
    match view {
        View::Text(text) => Some(text.measure(env)),
        View::Button(button) => Some(button.measure(env)),
        View::VStack(stack) => Some(stack.measure(env)),
        View::HStack(stack) => Some(stack.measure(env)),
        View::ZStack(overlay) => Some(overlay.measure(env)),
        View::Group(_) => None,
        View::Empty => Some(Rectangle::zero()),
    }
}

/// Resolve every leaf of `view` to an absolute rectangle.
///
/// A root that fills its parent is given the whole surface; any other root
/// keeps its natural size, with zero dimensions taken from the surface.
pub fn arrange<'v, A>(view: &'v View<A>, env: &Environment<'_>) -> Vec<Placed<'v, A>> {
    let extent = match measure(view, env) {
        Some(_) if view.fills_parent() => env.surface,
        Some(natural) => resolve_size(natural.size, env.surface),
        None => env.surface,
    };

    let mut pass = Pass {
        cursor: PassCursor::new(),
        placed: Vec::new(),
    };
    place(view, Point::zero(), extent, env, &mut pass);
    pass.placed
}

/// Place `view` shifted by `offset` inside an assigned `extent`.
pub(crate) fn place<'v, A>(
    view: &'v View<A>,
    offset: Point,
    extent: Size,
    env: &Environment<'_>,
    pass: &mut Pass<'v, A>,
) {
    match view {
        View::Text(text) => {
            let natural = text.measure(env);
            pass.placed.push(Placed {
                frame: Rectangle::new(natural.top_left + offset, extent),
                element: Element::Text(text),
            });
        }
        View::Button(button) => {
            let natural = button.measure(env);
            let ordinal = button.is_enabled().then(|| pass.cursor.claim());
            pass.placed.push(Placed {
                frame: Rectangle::new(natural.top_left + offset, extent),
                element: Element::Button { button, ordinal },
            });
        }
        View::VStack(stack) => {
            let origin = stack.measure(env).top_left + offset;
            stack.place_children(origin, extent, env, pass);
        }
        View::HStack(stack) => {
            let origin = stack.measure(env).top_left + offset;
            stack.place_children(origin, extent, env, pass);
        }
        View::ZStack(overlay) => overlay.place_children(offset, extent, env, pass),
        View::Group(group) => {
            visit_flat(group.children(), &mut |child| {
                let size = match measure(child, env) {
                    Some(natural) => resolve_size(natural.size, extent),
                    None => extent,
                };
                place(child, offset, size, env, pass);
            });
        }
        View::Empty => {}
    }
}

/// Rebuild `registry` from the enabled buttons of `view`.
///
/// The registry is reset, filled in document order and re-clamped, so a
/// selection that still exists survives the rebuild.
pub fn collect<A: Clone>(view: &View<A>, registry: &mut SelectionRegistry<A>) {
    registry.reset();
    register_enabled(view, registry);
    registry.clamp();

    debug!(
        "Registry rebuilt: {} slots, selected {}",
        registry.len(),
        registry.selected_index()
    );
}

fn register_enabled<A: Clone>(view: &View<A>, registry: &mut SelectionRegistry<A>) {
    if let View::Button(button) = view {
        if button.is_enabled() {
            registry.register(button.intent().clone());
        }
        return;
    }

    for child in view.children() {
        register_enabled(child, registry);
    }
}

/// Draw `view` onto `target`.
///
/// With a registry the button at the selected slot is drawn highlighted;
/// without one every enabled button is drawn in its resting state.
pub fn paint<A, D>(
    view: &View<A>,
    registry: Option<&SelectionRegistry<A>>,
    env: &Environment<'_>,
    target: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for placed in arrange(view, env) {
        match placed.element {
            Element::Text(text) => text.draw(placed.frame, env, target)?,
            Element::Button { button, ordinal } => {
                let state = match ordinal {
                    None => ButtonState::Disabled,
                    Some(index) if registry.is_some_and(|r| r.is_selected(index)) => {
                        ButtonState::Selected
                    }
                    Some(_) => ButtonState::Normal,
                };
                button.draw(placed.frame, state, env, target)?;
            }
        }
    }

    Ok(())
}
