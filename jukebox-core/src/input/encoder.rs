//! Rotary encoder detents shared between the edge interrupt and the main loop.
//!
//! The interrupt handler samples both phase lines and calls
//! [`EncoderLatch::on_edge`], which adds one detent to a signed count. The
//! main loop drains it with [`EncoderLatch::take`], one step per iteration,
//! so a fast spin is applied over a few iterations instead of being lost.

use core::cell::Cell;
use critical_section::Mutex;

use super::Step;

pub struct EncoderLatch {
    /// Net detents not yet taken, forward positive
    detents: Mutex<Cell<i8>>,
}

impl EncoderLatch {
    pub const fn new() -> Self {
        Self {
            detents: Mutex::new(Cell::new(0_i8)),
        }
    }

    /// Interrupt context. Never blocks.
    pub fn on_edge(&self, a: bool, b: bool) {
        let delta = match Step::from_phases(a, b) {
            Step::Forward => 1_i8,
            Step::Backward => -1_i8,
        };
        critical_section::with(|critical_section| {
            let detents = self.detents.borrow(critical_section);
            detents.set(detents.get().saturating_add(delta));
        });
    }

    /// Take one pending step, if any.
    pub fn take(&self) -> Option<Step> {
        critical_section::with(|critical_section| {
            let detents = self.detents.borrow(critical_section);
            let count = detents.get();
            let step = match count {
                0 => return None,
                1.. => Step::Forward,
                _ => Step::Backward,
            };
            detents.set(count - count.signum());
            Some(step)
        })
    }
}

impl Default for EncoderLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_rule() {
        let latch = EncoderLatch::new();
        latch.on_edge(true, false);
        assert_eq!(latch.take(), Some(Step::Forward));
        latch.on_edge(true, true);
        assert_eq!(latch.take(), Some(Step::Backward));
        latch.on_edge(false, false);
        assert_eq!(latch.take(), Some(Step::Backward));
    }

    #[test]
    fn every_detent_is_taken_once() {
        let latch = EncoderLatch::new();
        assert_eq!(latch.take(), None);
        for _ in 0..3 {
            latch.on_edge(true, false);
        }
        assert_eq!(latch.take(), Some(Step::Forward));
        assert_eq!(latch.take(), Some(Step::Forward));
        assert_eq!(latch.take(), Some(Step::Forward));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn opposite_detents_cancel() {
        let latch = EncoderLatch::new();
        latch.on_edge(true, false);
        latch.on_edge(true, true);
        latch.on_edge(true, true);
        assert_eq!(latch.take(), Some(Step::Backward));
        assert_eq!(latch.take(), None);
    }
}
