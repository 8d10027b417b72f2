// src/ui/view.rs
//! Declarative view tree
//!
//! A screen describes itself as a [`View`] every frame. The tree is a plain
//! value: it owns its children, is never mutated after construction and is
//! dropped at the end of the frame. Interactive leaves carry an intent of
//! type `A` that is handed back to the screen when activated.

use alloc::vec::Vec;

use crate::ui::components::{Button, Text};
use crate::ui::layouts::{HStack, VStack, ZStack};

/// One node of the view tree
#[derive(Debug, Clone, PartialEq)]
pub enum View<A> {
    Text(Text),
    Button(Button<A>),
    VStack(VStack<A>),
    HStack(HStack<A>),
    ZStack(ZStack<A>),
    Group(Group<A>),
    /// Placeholder for a hidden branch; draws nothing and takes no space.
    Empty,
}

impl<A> View<A> {
    /// `f()` when `condition` holds, otherwise the empty placeholder.
    pub fn when<F>(condition: bool, f: F) -> Self
    where
        F: FnOnce() -> View<A>,
    {
        if condition { f() } else { View::Empty }
    }

    /// Pick one of two branches.
    pub fn either<T, E>(condition: bool, then: T, otherwise: E) -> Self
    where
        T: FnOnce() -> View<A>,
        E: FnOnce() -> View<A>,
    {
        if condition { then() } else { otherwise() }
    }

    /// Stacks skip this node entirely, spacing included.
    pub fn ignores_spacing(&self) -> bool {
        matches!(self, View::Empty)
    }

    /// Whether the node takes the whole surface when it is the root.
    pub fn fills_parent(&self) -> bool {
        match self {
            View::VStack(stack) => stack.frame().is_none(),
            View::HStack(stack) => stack.frame().is_none(),
            View::ZStack(overlay) => overlay.frame().is_none(),
            View::Group(_) => true,
            View::Text(_) | View::Button(_) | View::Empty => false,
        }
    }

    /// Direct children in declaration order; empty for leaves.
    pub fn children(&self) -> &[View<A>] {
        match self {
            View::VStack(stack) => stack.children(),
            View::HStack(stack) => stack.children(),
            View::ZStack(overlay) => overlay.children(),
            View::Group(group) => group.children(),
            View::Text(_) | View::Button(_) | View::Empty => &[],
        }
    }
}

/// Transparent group
///
/// Has no rectangle of its own. Inside a container its children are spliced
/// into the container's child list; at the root they share one offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<A> {
    children: Vec<View<A>>,
}

impl<A> Group<A> {
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator<Item = View<A>>,
    {
        Self {
            children: children.into_iter().collect(),
        }
    }

    pub fn children(&self) -> &[View<A>] {
        &self.children
    }
}

/// Call `visit` for every child, splicing group members in place.
pub(crate) fn visit_flat<'v, A>(children: &'v [View<A>], visit: &mut dyn FnMut(&'v View<A>)) {
    for child in children {
        match child {
            View::Group(group) => visit_flat(group.children(), visit),
            other => visit(other),
        }
    }
}

impl<A> From<Text> for View<A> {
    fn from(text: Text) -> Self {
        View::Text(text)
    }
}

impl<A> From<Button<A>> for View<A> {
    fn from(button: Button<A>) -> Self {
        View::Button(button)
    }
}

impl<A> From<VStack<A>> for View<A> {
    fn from(stack: VStack<A>) -> Self {
        View::VStack(stack)
    }
}

impl<A> From<HStack<A>> for View<A> {
    fn from(stack: HStack<A>) -> Self {
        View::HStack(stack)
    }
}

impl<A> From<ZStack<A>> for View<A> {
    fn from(overlay: ZStack<A>) -> Self {
        View::ZStack(overlay)
    }
}

impl<A> From<Group<A>> for View<A> {
    fn from(group: Group<A>) -> Self {
        View::Group(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditionals_produce_placeholder() {
        let shown: View<u8> = View::when(true, || Text::new("on").into());
        let hidden: View<u8> = View::when(false, || Text::new("on").into());
        assert!(matches!(shown, View::Text(_)));
        assert_eq!(hidden, View::Empty);

        let picked: View<u8> =
            View::either(false, || Button::new("a", 1).into(), || View::Empty);
        assert!(picked.ignores_spacing());
    }

    #[test]
    fn test_groups_are_spliced_into_parent() {
        let children: Vec<View<u8>> = alloc::vec![
            Button::new("a", 0).into(),
            Group::new([
                Button::new("b", 1).into(),
                Group::new([Button::new("c", 2).into()]).into(),
            ])
            .into(),
            Button::new("d", 3).into(),
        ];

        let mut seen = Vec::new();
        visit_flat(&children, &mut |child| {
            if let View::Button(button) = child {
                seen.push(*button.intent());
            }
        });

        assert_eq!(seen, [0, 1, 2, 3]);
    }

    #[test]
    fn test_fill_parent_only_without_frame() {
        use embedded_graphics::prelude::*;
        use embedded_graphics::primitives::Rectangle;

        let free: View<u8> = VStack::new([]).into();
        let framed: View<u8> = VStack::new([])
            .with_frame(Rectangle::new(Point::zero(), Size::new(10, 10)))
            .into();
        let leaf: View<u8> = Text::new("x").into();

        assert!(free.fills_parent());
        assert!(!framed.fills_parent());
        assert!(!leaf.fills_parent());
        assert!(View::<u8>::Group(Group::new([])).fills_parent());
    }
}
