// src/ui/layouts/overlay.rs
//! Overlay container drawing its children on top of each other

use alloc::vec::Vec;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::geometry::{bounding_box, resolve_size};
use crate::ui::core::Environment;
use crate::ui::layout::{Pass, measure, place};
use crate::ui::view::{View, visit_flat};

/// Overlay (z-stack) container
///
/// Children keep their own rectangles and all receive the offset the overlay
/// itself was given, so they overlap in declaration order: later children
/// paint over earlier ones. Without an explicit frame the overlay measures as
/// the bounding box of its children.
#[derive(Debug, Clone, PartialEq)]
pub struct ZStack<A> {
    children: Vec<View<A>>,
    frame: Option<Rectangle>,
}

impl<A> ZStack<A> {
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator<Item = View<A>>,
    {
        Self {
            children: children.into_iter().collect(),
            frame: None,
        }
    }

    pub fn with_frame(mut self, frame: Rectangle) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn children(&self) -> &[View<A>] {
        &self.children
    }

    pub fn frame(&self) -> Option<Rectangle> {
        self.frame
    }

    /// Natural rectangle: the explicit frame, or the children's bounding box.
    pub fn measure(&self, env: &Environment<'_>) -> Rectangle {
        if let Some(frame) = self.frame {
            return frame;
        }

        let mut frames = Vec::new();
        visit_flat(&self.children, &mut |child| {
            if child.ignores_spacing() {
                return;
            }
            if let Some(natural) = measure(child, env) {
                frames.push(natural);
            }
        });

        bounding_box(frames).unwrap_or(Rectangle::zero())
    }

    pub(crate) fn place_children<'v>(
        &'v self,
        offset: Point,
        extent: Size,
        env: &Environment<'_>,
        pass: &mut Pass<'v, A>,
    ) {
        visit_flat(&self.children, &mut |child| {
            if child.ignores_spacing() {
                return;
            }
            let Some(natural) = measure(child, env) else {
                return;
            };

            place(child, offset, resolve_size(natural.size, extent), env, pass);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontConfig;
    use crate::ui::components::Button;
    use crate::ui::fonts::MonoFontBook;
    use crate::ui::layout::arrange;
    use crate::ui::layouts::VStack;
    use crate::ui::styling::Theme;
    use alloc::vec;

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    fn at(id: u8, frame: Rectangle) -> View<u8> {
        Button::unlabeled(id).with_frame(frame).into()
    }

    #[test]
    fn test_bounding_box_of_children() {
        let fonts = MonoFontBook::new(FontConfig::default());
        let env = Environment::new(Size::new(128, 64), Theme::default(), &fonts);

        let overlay = ZStack::new([at(0, rect(0, 0, 10, 10)), at(1, rect(5, 5, 10, 10))]);
        assert_eq!(overlay.measure(&env), rect(0, 0, 15, 15));

        let hidden = ZStack::new([View::Empty, at(0, rect(3, 4, 5, 6))]);
        assert_eq!(hidden.measure(&env), rect(3, 4, 5, 6));

        let nothing: ZStack<u8> = ZStack::new([View::Empty]);
        assert_eq!(nothing.measure(&env), Rectangle::zero());
    }

    #[test]
    fn test_children_overlap_in_declaration_order() {
        let fonts = MonoFontBook::new(FontConfig::default());
        let env = Environment::new(Size::new(128, 64), Theme::default(), &fonts);

        let view: View<u8> =
            ZStack::new([at(0, rect(0, 0, 10, 10)), at(1, rect(5, 5, 10, 10))]).into();
        let placed = arrange(&view, &env);

        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].frame, rect(0, 0, 10, 10));
        assert_eq!(placed[1].frame, rect(5, 5, 10, 10));
    }

    #[test]
    fn test_overlay_moves_as_one_inside_a_stack() {
        let fonts = MonoFontBook::new(FontConfig::default());
        let env = Environment::new(Size::new(128, 64), Theme::default(), &fonts);

        let view: View<u8> = VStack::new([
            at(0, rect(0, 0, 20, 10)),
            ZStack::new([at(1, rect(0, 0, 10, 10)), at(2, rect(5, 5, 10, 10))]).into(),
        ])
        .with_frame(rect(0, 0, 20, 40))
        .with_spacing(2)
        .into();

        let frames: Vec<Rectangle> = arrange(&view, &env).iter().map(|p| p.frame).collect();
        assert_eq!(
            frames,
            vec![rect(0, 0, 20, 10), rect(2, 12, 10, 10), rect(7, 17, 10, 10)]
        );
    }
}
