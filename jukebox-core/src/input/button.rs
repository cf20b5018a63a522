//! Push buttons, wired to ground with the pin's pull-up enabled.

use embedded_hal::{blocking::delay::DelayMs, digital::v2::InputPin};

use super::Press;
use crate::clock::{elapsed, Ticks};

/// A confirmed level change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// Polled edge detector. A change of level is only accepted if it still
/// holds after the settle delay.
struct Debounced<P> {
    pin: P,
    pressed: bool,
    settle_ms: u16,
}

impl<P: InputPin> Debounced<P> {
    fn new(pin: P, settle_ms: u16) -> Self {
        Self {
            pin,
            pressed: false,
            settle_ms,
        }
    }

    /// Tied to ground, so low means pressed. A pin that can't be read counts
    /// as released.
    fn level(&self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }

    fn poll<D: DelayMs<u16>>(&mut self, delay: &mut D) -> Option<Edge> {
        let level = self.level();
        if level == self.pressed {
            return None;
        }

        delay.delay_ms(self.settle_ms);
        if self.level() != level {
            // Bounce
            return None;
        }

        self.pressed = level;
        Some(match level {
            true => Edge::Pressed,
            false => Edge::Released,
        })
    }
}

/// Select button: one press event per physical press, however long it is held.
pub struct SelectButton<P> {
    button: Debounced<P>,
}

impl<P: InputPin> SelectButton<P> {
    pub fn new(pin: P, settle_ms: u16) -> Self {
        Self {
            button: Debounced::new(pin, settle_ms),
        }
    }

    pub fn pressed<D: DelayMs<u16>>(&mut self, delay: &mut D) -> bool {
        matches!(self.button.poll(delay), Some(Edge::Pressed))
    }
}

/// Admin button: measures how long it was held and classifies the gesture
/// when it is released.
pub struct AdminButton<P> {
    button: Debounced<P>,
    pressed_at: Option<Ticks>,
    long_press_ticks: Ticks,
}

impl<P: InputPin> AdminButton<P> {
    pub fn new(pin: P, settle_ms: u16, long_press_ticks: Ticks) -> Self {
        Self {
            button: Debounced::new(pin, settle_ms),
            pressed_at: None,
            long_press_ticks,
        }
    }

    pub fn poll<D: DelayMs<u16>>(&mut self, now: Ticks, delay: &mut D) -> Option<Press> {
        match self.button.poll(delay)? {
            Edge::Pressed => {
                self.pressed_at = Some(now);
                None
            }
            Edge::Released => {
                let pressed_at = self.pressed_at.take()?;
                if elapsed(now, pressed_at) >= self.long_press_ticks {
                    Some(Press::Long)
                } else {
                    Some(Press::Short)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::{cell::Cell, rc::Rc, vec::Vec};

    /// `true` while the button is physically held
    #[derive(Clone, Default)]
    struct Contact(Rc<Cell<bool>>);

    impl InputPin for Contact {
        type Error = Infallible;
        fn is_high(&self) -> Result<bool, Infallible> {
            Ok(!self.0.get())
        }
        fn is_low(&self) -> Result<bool, Infallible> {
            Ok(self.0.get())
        }
    }

    /// Applies a scripted contact level when the settle delay runs out.
    #[derive(Default)]
    struct Settle {
        contact: Contact,
        after: Vec<bool>,
        waited: Vec<u16>,
    }

    impl DelayMs<u16> for Settle {
        fn delay_ms(&mut self, ms: u16) {
            self.waited.push(ms);
            if !self.after.is_empty() {
                self.contact.0.set(self.after.remove(0));
            }
        }
    }

    #[test]
    fn select_reports_one_press_while_held() {
        let contact = Contact::default();
        let mut delay = Settle {
            contact: contact.clone(),
            ..Settle::default()
        };
        let mut select = SelectButton::new(contact.clone(), 50);

        assert!(!select.pressed(&mut delay));
        contact.0.set(true);
        assert!(select.pressed(&mut delay));
        assert!(!select.pressed(&mut delay));
        assert!(!select.pressed(&mut delay));
        assert_eq!(delay.waited, [50]);

        contact.0.set(false);
        assert!(!select.pressed(&mut delay));
        contact.0.set(true);
        assert!(select.pressed(&mut delay));
    }

    #[test]
    fn select_rejects_bounce() {
        let contact = Contact::default();
        let mut delay = Settle {
            contact: contact.clone(),
            after: vec![false],
            ..Settle::default()
        };
        let mut select = SelectButton::new(contact.clone(), 50);

        contact.0.set(true);
        assert!(!select.pressed(&mut delay));
        assert_eq!(delay.waited.len(), 1);
    }

    #[test]
    fn admin_classifies_on_release() {
        let contact = Contact::default();
        let mut delay = Settle {
            contact: contact.clone(),
            ..Settle::default()
        };
        let mut admin = AdminButton::new(contact.clone(), 50, 2);

        contact.0.set(true);
        assert_eq!(admin.poll(10, &mut delay), None);
        assert_eq!(admin.poll(11, &mut delay), None);
        contact.0.set(false);
        assert_eq!(admin.poll(11, &mut delay), Some(Press::Short));

        contact.0.set(true);
        assert_eq!(admin.poll(20, &mut delay), None);
        assert_eq!(admin.poll(25, &mut delay), None);
        contact.0.set(false);
        assert_eq!(admin.poll(26, &mut delay), Some(Press::Long));
        assert_eq!(admin.poll(27, &mut delay), None);
    }

    #[test]
    fn admin_long_threshold_is_inclusive() {
        let contact = Contact::default();
        let mut delay = Settle {
            contact: contact.clone(),
            ..Settle::default()
        };
        let mut admin = AdminButton::new(contact.clone(), 50, 2);

        contact.0.set(true);
        admin.poll(0, &mut delay);
        contact.0.set(false);
        assert_eq!(admin.poll(2, &mut delay), Some(Press::Long));
    }
}
