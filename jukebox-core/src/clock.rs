//! Software clock: a seconds counter advanced from a periodic timer interrupt.
//!
//! The hardware timer fires many times per second; the clock swallows
//! `interrupts_per_tick` of those before advancing by one tick. Every timeout
//! in the jukebox is the difference of two [`SoftClock::ticks`] samples, see
//! [`elapsed`].

use core::cell::Cell;
use critical_section::Mutex;

/// One tick is nominally one second.
pub type Ticks = u32;

/// Ticks between `since` and `now`, correct across the counter wrapping.
pub fn elapsed(now: Ticks, since: Ticks) -> Ticks {
    now.wrapping_sub(since)
}

pub struct SoftClock {
    ticks: Mutex<Cell<Ticks>>,
    interrupts: Mutex<Cell<u16>>,
    interrupts_per_tick: u16,
}

impl SoftClock {
    pub const fn new(interrupts_per_tick: u16) -> Self {
        Self {
            ticks: Mutex::new(Cell::new(0_u32)),
            interrupts: Mutex::new(Cell::new(0_u16)),
            interrupts_per_tick,
        }
    }

    /// Call from the timer interrupt handler, once per timer period.
    pub fn on_interrupt(&self) {
        critical_section::with(|critical_section| {
            let interrupts = self.interrupts.borrow(critical_section);
            let count = interrupts.get() + 1;
            if count >= self.interrupts_per_tick {
                interrupts.set(0_u16);
                let ticks = self.ticks.borrow(critical_section);
                ticks.set(ticks.get().wrapping_add(1));
            } else {
                interrupts.set(count);
            }
        });
    }

    /// Ticks since the clock was last reset
    pub fn ticks(&self) -> Ticks {
        critical_section::with(|critical_section| self.ticks.borrow(critical_section).get())
    }

    pub fn reset(&self) {
        critical_section::with(|critical_section| {
            self.ticks.borrow(critical_section).set(0_u32);
            self.interrupts.borrow(critical_section).set(0_u16);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_once_per_prescaled_period() {
        let clock = SoftClock::new(125);
        for _ in 0..124 {
            clock.on_interrupt();
        }
        assert_eq!(clock.ticks(), 0);
        clock.on_interrupt();
        assert_eq!(clock.ticks(), 1);
        for _ in 0..250 {
            clock.on_interrupt();
        }
        assert_eq!(clock.ticks(), 3);
    }

    #[test]
    fn reset_clears_partial_period() {
        let clock = SoftClock::new(2);
        clock.on_interrupt();
        clock.on_interrupt();
        clock.on_interrupt();
        clock.reset();
        assert_eq!(clock.ticks(), 0);
        clock.on_interrupt();
        assert_eq!(clock.ticks(), 0);
    }

    #[test]
    fn elapsed_survives_wraparound() {
        assert_eq!(elapsed(5, 2), 3);
        assert_eq!(elapsed(1, u32::MAX), 2);
        assert_eq!(elapsed(7, 7), 0);
    }
}
