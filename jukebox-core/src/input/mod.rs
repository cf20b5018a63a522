//! Debounced and classified physical inputs.
//!
//! The encoder is interrupt driven and only latches a step for the main loop
//! to pick up. Both buttons and the module's BUSY line are polled from the
//! main loop.

mod button;
mod busy;
mod encoder;

pub use button::{AdminButton, Edge, SelectButton};
pub use busy::BusyMonitor;
pub use encoder::EncoderLatch;

use ufmt::derive::uDebug;

/// One detent of the rotary encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    /// Quadrature phase rule: the lines disagree at the edge when turning
    /// forward and agree when turning backward.
    pub fn from_phases(a: bool, b: bool) -> Self {
        if a != b {
            Step::Forward
        } else {
            Step::Backward
        }
    }
}

/// Admin button gesture, reported on release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum Press {
    Short,
    Long,
}
