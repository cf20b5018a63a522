//! Interrupts

use arduino_hal::{
    pac::{EXINT, TC0},
    pins, Peripherals,
};
use jukebox_core::{EncoderLatch, SoftClock, Ticks};

use crate::{pins, shared::INTERRUPTS_PER_TICK};

pub use rotary_encoder::{rotary_encoder_init, ENCODER};
pub use ticks::{ticks, ticks_init};

/// Tick timer, adapted from Rahix's millis interrupt:
/// https://blog.rahix.de/005-avr-hal-millis/
mod ticks {
    use super::*;

    const PRESCALER: u32 = 1_024_u32;
    const TIMER_COUNTS: u32 = 125_u32;

    static CLOCK: SoftClock = SoftClock::new(INTERRUPTS_PER_TICK);

    pub fn ticks_init(tc0: TC0) {
        // Configure the timer for the above interval (in CTC mode)
        // and enable its interrupt
        tc0.tccr0a.write(|w| w.wgm0().ctc());
        tc0.ocr0a.write(|w| w.bits(TIMER_COUNTS as u8));
        tc0.tccr0b.write(|w| match PRESCALER {
            8_u32 => w.cs0().prescale_8(),
            64_u32 => w.cs0().prescale_64(),
            256_u32 => w.cs0().prescale_256(),
            1024_u32 => w.cs0().prescale_1024(),
            _ => panic!(),
        });
        tc0.timsk0.write(|w| w.ocie0a().set_bit());

        CLOCK.reset();
    }

    #[avr_device::interrupt(atmega328p)]
    #[allow(non_snake_case)]
    fn TIMER0_COMPA() {
        CLOCK.on_interrupt();
    }

    /// Whole ticks since the timer was configured
    pub fn ticks() -> Ticks {
        CLOCK.ticks()
    }
}

mod rotary_encoder {
    use super::*;

    pub static ENCODER: EncoderLatch = EncoderLatch::new();

    /// Fire INT0 on the rising edge of A
    ///
    /// Safety note: the caller must ensure A is wired to PD2 (INT0)!
    pub unsafe fn rotary_encoder_init(exint: &EXINT, _a: &pins::rotary_encoder::A) {
        exint.eicra.modify(|_, w| w.isc0().bits(0b11));
        exint.eimsk.modify(|_, w| w.int0().set_bit());
    }

    #[avr_device::interrupt(atmega328p)]
    #[allow(non_snake_case)]
    fn INT0() {
        let peripherals = unsafe { Peripherals::steal() };
        let pins = pins!(peripherals);
        let a = { pins.d2.into_pull_up_input() as pins::rotary_encoder::A }.is_high();
        let b = { pins.d3.into_pull_up_input() as pins::rotary_encoder::B }.is_high();
        ENCODER.on_edge(a, b);
    }
}
