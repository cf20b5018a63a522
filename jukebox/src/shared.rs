use arduino_hal::{
    hal::port::{PD0, PD1},
    pac::USART0,
    port::{
        mode::{Input, Output},
        Pin,
    },
    Usart,
};

/// The MP3 Trigger listens at this rate, so the console does too
pub const BAUD_RATE: u32 = 38_400;
pub type Serial = Usart<USART0, Pin<Input, PD0>, Pin<Output, PD1>>;

/// Timer0 compare interrupts in one tick (1024 * 125 / 16MHz = 8ms each)
pub const INTERRUPTS_PER_TICK: u16 = 125;
/// Control loop period in milliseconds
pub const LOOP_PERIOD_MS: u16 = 5;
pub const I2C_SPEED: u32 = 50_000;
pub const RNG_SEED: u64 = 13;
