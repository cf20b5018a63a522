//! Pin types to improve type safety

use arduino_hal::{
    hal::port,
    port::{
        mode::{Input, Output, PullUp},
        Pin,
    },
};

pub mod rotary_encoder {
    use super::*;
    /// Also INT0
    pub type A = Pin<Input<PullUp>, port::PD2>;
    pub type B = Pin<Input<PullUp>, port::PD3>;
}

pub mod buttons {
    use super::*;
    pub type Select = Pin<Input<PullUp>, port::PD4>;
    pub type Admin = Pin<Input<PullUp>, port::PD5>;
}

pub mod mp3_trigger {
    use super::*;
    /// Low while a track plays
    pub type Busy = Pin<Input<PullUp>, port::PB2>;
}

pub mod character_lcd {
    use super::*;
    /// RS, E and D4-D7 are on different ports, so they are downgraded
    pub type Pin = super::Pin<Output>;
}

pub struct RotaryEncoderPins {
    pub a: rotary_encoder::A,
    pub b: rotary_encoder::B,
}

pub struct IICPins {
    pub sda: Pin<Input<PullUp>, port::PC4>,
    pub scl: Pin<Input<PullUp>, port::PC5>,
}
