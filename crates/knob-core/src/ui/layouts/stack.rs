// src/ui/layouts/stack.rs
//! Vertical and horizontal stacks

use alloc::vec::Vec;
use core::marker::PhantomData;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::geometry::{FrameExt, resolve_size};
use crate::ui::core::{Alignment, Axis, Environment};
use crate::ui::layout::{Pass, measure, place};
use crate::ui::view::{View, visit_flat};

/// Type-level stacking direction of a [`Stack`].
pub trait StackAxis {
    const AXIS: Axis;
}

/// Children run top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vertical;

/// Children run left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Horizontal;

impl StackAxis for Vertical {
    const AXIS: Axis = Axis::Vertical;
}

impl StackAxis for Horizontal {
    const AXIS: Axis = Axis::Horizontal;
}

/// Container that lays its children out one after another along an axis
///
/// Each child keeps its own natural size; zero dimensions in a child's frame
/// take the matching dimension of the stack. Across the axis children are
/// placed according to the [`Alignment`]. Empty placeholders take neither
/// space nor spacing, so hidden branches leave no gap.
///
/// Without an explicit frame the stack sizes itself from its children (sum
/// along the axis plus spacing between them, maximum across). As the root of
/// a screen it is then given the whole surface instead.
///
/// # Examples
/// ```ignore
/// let menu: View<Intent> = VStack::new([
///     Text::new("Menu").into(),
///     Button::new("Start", Intent::Start).into(),
///     Button::new("Stop", Intent::Stop).into(),
/// ])
/// .with_alignment(Alignment::Leading)
/// .with_spacing(6)
/// .into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<A, X> {
    children: Vec<View<A>>,
    frame: Option<Rectangle>,
    alignment: Alignment,
    spacing: Option<u32>,
    axis: PhantomData<X>,
}

pub type VStack<A> = Stack<A, Vertical>;
pub type HStack<A> = Stack<A, Horizontal>;

impl<A, X: StackAxis> Stack<A, X> {
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator<Item = View<A>>,
    {
        Self {
            children: children.into_iter().collect(),
            frame: None,
            alignment: Alignment::default(),
            spacing: None,
            axis: PhantomData,
        }
    }

    /// Fix the stack's rectangle instead of deriving it from the children.
    pub fn with_frame(mut self, frame: Rectangle) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Cross-axis placement of the children.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Gap between consecutive children, overriding the theme spacing.
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn children(&self) -> &[View<A>] {
        &self.children
    }

    pub fn frame(&self) -> Option<Rectangle> {
        self.frame
    }

    pub fn spacing(&self, env: &Environment<'_>) -> u32 {
        self.spacing.unwrap_or(env.theme.spacing)
    }

    /// Natural rectangle: the explicit frame, or the intrinsic one at the origin.
    pub fn measure(&self, env: &Environment<'_>) -> Rectangle {
        self.frame.unwrap_or_else(|| self.intrinsic(env))
    }

    fn intrinsic(&self, env: &Environment<'_>) -> Rectangle {
        let axis = X::AXIS;
        let spacing = self.spacing(env);
        let mut primary = 0;
        let mut cross = 0;
        let mut first = true;

        visit_flat(&self.children, &mut |child| {
            if child.ignores_spacing() {
                return;
            }
            let Some(natural) = measure(child, env) else {
                return;
            };

            if !first {
                primary += spacing;
            }
            primary += axis.primary(natural.size);
            cross = cross.max(axis.cross(natural.size));
            first = false;
        });

        Rectangle::new(Point::zero(), axis.size(primary, cross))
    }

    /// Position every child inside the stack placed at `origin` with `extent`.
    pub(crate) fn place_children<'v>(
        &'v self,
        origin: Point,
        extent: Size,
        env: &Environment<'_>,
        pass: &mut Pass<'v, A>,
    ) {
        let axis = X::AXIS;
        let spacing = self.spacing(env) as i32;
        let alignment = self.alignment;
        let mut running = 0;

        visit_flat(&self.children, &mut |child| {
            if child.ignores_spacing() {
                return;
            }
            let Some(natural) = measure(child, env) else {
                return;
            };

            let size = resolve_size(natural.size, extent);
            let cross = alignment.offset(axis.cross(extent), axis.cross(size));
            let target = origin + axis.point(running, cross);

            place(child, natural.delta_to(target), size, env, pass);
            running += axis.primary(size) as i32 + spacing;
        });
    }
}
