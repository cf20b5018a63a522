#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use arduino_hal::{default_serial, delay_ms, Delay, I2c};
use console::{debug, println, set_console, trace, SharedSerial};
use jukebox_core::{Catalog, Config, CredentialReader, Frontend, Mp3Trigger, Screen, Session};
use lcd::CharacterLcd;
use pins::{IICPins, RotaryEncoderPins};
use rand::{rngs::SmallRng, SeedableRng};
use shared::Serial;

use crate::{
    interrupts::ENCODER,
    shared::{I2C_SPEED, LOOP_PERIOD_MS, RNG_SEED},
};

pub mod console;
pub mod interrupts;
mod lcd;
pub mod panic;
pub mod pins;
pub mod shared;

#[arduino_hal::entry]
fn main() -> ! {
    let peripherals = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(peripherals);
    let serial: Serial = default_serial!(peripherals, pins, shared::BAUD_RATE);
    set_console(serial);

    println!("Hello from the Jukebox!");

    // Set up pin handles
    let rotary_encoder_pins = RotaryEncoderPins {
        a: pins.d2.into_pull_up_input(),
        b: pins.d3.into_pull_up_input(),
    };
    let select_button_pin: pins::buttons::Select = pins.d4.into_pull_up_input();
    let admin_button_pin: pins::buttons::Admin = pins.d5.into_pull_up_input();
    let busy_pin: pins::mp3_trigger::Busy = pins.d10.into_pull_up_input();
    let iic_pins = IICPins {
        sda: pins.a4.into_pull_up_input(),
        scl: pins.a5.into_pull_up_input(),
    };

    // Intialize interrupts
    interrupts::ticks_init(peripherals.TC0);
    unsafe {
        interrupts::rotary_encoder_init(&peripherals.EXINT, &rotary_encoder_pins.a);
    };
    unsafe { avr_device::interrupt::enable() };

    debug!("[DEBUG] Character LCD initialization");
    let mut character_lcd = CharacterLcd::new(
        pins.d8.into_output().downgrade(),
        pins.d9.into_output().downgrade(),
        pins.a0.into_output().downgrade(),
        pins.a1.into_output().downgrade(),
        pins.a2.into_output().downgrade(),
        pins.a3.into_output().downgrade(),
    );

    debug!("[DEBUG] I2C & RFID reader initialization");
    let i2c = I2c::new(peripherals.TWI, iic_pins.sda, iic_pins.scl, I2C_SPEED);
    let reader = CredentialReader::new(i2c);

    let config = Config::DEFAULT;
    let catalog = Catalog::DEFAULT;

    debug!("[DEBUG] MP3 Trigger initialization");
    let mut player = Mp3Trigger::new(SharedSerial, busy_pin, Delay::new(), catalog.len());

    let mut frontend = Frontend::new(
        &ENCODER,
        reader,
        select_button_pin,
        admin_button_pin,
        Delay::new(),
        &config,
    );
    let mut session = Session::new(catalog, config, SmallRng::seed_from_u64(RNG_SEED));

    Screen::compose(session.state(), session.catalog()).draw(&mut character_lcd);

    // Main loop
    loop {
        let now = interrupts::ticks();
        let pending = frontend.collect(now, &mut player);
        if !pending.is_empty() {
            debug!("[DEBUG] {}: {:?}", now, pending);
        }

        if session.step(now, &pending, &mut player) {
            trace!("[TRACE] Redraw, credits {:?}", session.state().credits);
            Screen::compose(session.state(), session.catalog()).draw(&mut character_lcd);
        }

        delay_ms(LOOP_PERIOD_MS);
    }
}
