//! Counter menu used to exercise the engine on the desktop.
//!
//! The details toggle adds and removes buttons, so the selection registry
//! grows and shrinks while the dial stays put.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use knob_core::Screen;
use knob_core::ui::styling::COLOR_ACCENT;
use knob_core::ui::{Alignment, Button, Group, HStack, Text, VStack, View};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    Increment,
    Decrement,
    ToggleDetails,
    Reset,
}

#[derive(Debug, Default)]
pub struct CounterMenu {
    count: i32,
    details: bool,
}

impl CounterMenu {
    fn details_panel(&self) -> View<MenuIntent> {
        Group::new([
            Text::new(&format!("Parity: {}", if self.count % 2 == 0 { "even" } else { "odd" }))
                .into(),
            Button::new("Reset", MenuIntent::Reset)
                .with_enabled(self.count != 0)
                .into(),
        ])
        .into()
    }
}

impl Screen for CounterMenu {
    type Intent = MenuIntent;

    fn view(&self) -> View<MenuIntent> {
        VStack::new([
            Text::new("Counter")
                .with_point_size(14)
                .with_color(COLOR_ACCENT)
                .into(),
            Text::new(&format!("Value: {}", self.count)).into(),
            HStack::new([
                Button::new("-", MenuIntent::Decrement)
                    .with_frame(Rectangle::new(Point::zero(), Size::new(40, 20)))
                    .into(),
                Button::new("+", MenuIntent::Increment)
                    .with_frame(Rectangle::new(Point::zero(), Size::new(40, 20)))
                    .into(),
            ])
            .with_spacing(8)
            .into(),
            View::either(
                self.details,
                || Button::new("Hide details", MenuIntent::ToggleDetails).into(),
                || Button::new("Show details", MenuIntent::ToggleDetails).into(),
            ),
            View::when(self.details, || self.details_panel()),
        ])
        .with_alignment(Alignment::Center)
        .with_spacing(6)
        .into()
    }

    fn apply(&mut self, intent: MenuIntent) {
        match intent {
            MenuIntent::Increment => self.count += 1,
            MenuIntent::Decrement => self.count -= 1,
            MenuIntent::ToggleDetails => self.details = !self.details,
            MenuIntent::Reset => self.count = 0,
        }
        info!("{:?} -> count {}, details {}", intent, self.count, self.details);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knob_core::SelectionRegistry;
    use knob_core::ui::collect;

    fn slots(menu: &CounterMenu) -> Vec<MenuIntent> {
        let mut registry = SelectionRegistry::new();
        collect(&menu.view(), &mut registry);
        registry.slots().to_vec()
    }

    #[test]
    fn test_details_reveal_reset_once_counter_moved() {
        let mut menu = CounterMenu::default();
        assert_eq!(
            slots(&menu),
            [
                MenuIntent::Decrement,
                MenuIntent::Increment,
                MenuIntent::ToggleDetails
            ]
        );

        menu.apply(MenuIntent::ToggleDetails);
        assert_eq!(slots(&menu).len(), 3);

        menu.apply(MenuIntent::Increment);
        assert_eq!(slots(&menu).last(), Some(&MenuIntent::Reset));

        menu.apply(MenuIntent::Reset);
        menu.apply(MenuIntent::ToggleDetails);
        assert_eq!(slots(&menu).len(), 3);
    }
}
