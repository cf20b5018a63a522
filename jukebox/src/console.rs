//! Serial console
//!
//! USART0 is wired to the MP3 Trigger, so the port lives in a global and is
//! shared: the player writes commands through [`SharedSerial`] and, on a bench
//! build with the `console` feature, the macros below write log lines to the
//! same port. Without the features the macros expand to nothing.

use avr_device::interrupt::{self, Mutex};
use core::cell::RefCell;
use embedded_hal::serial;

use crate::shared::Serial;

pub static CONSOLE: Mutex<RefCell<Option<Serial>>> = Mutex::new(RefCell::new(None));

pub fn set_console(console: Serial) {
    interrupt::free(|critical_section| {
        *CONSOLE.borrow(critical_section).borrow_mut() = Some(console);
    });
}

macro_rules! println {
    ($($t:tt)*) => {{
        #[cfg(feature = "console")]
        {
            ::avr_device::interrupt::free(|critical_section| {
                if let Some(console) = $crate::console::CONSOLE
                    .borrow(critical_section)
                    .borrow_mut()
                    .as_mut()
                {
                    let _ = ::ufmt::uwriteln!(console, $($t)*);
                }
            });
        }
    }};
}

macro_rules! debug {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug")]
        {
            $crate::console::println!($($t)*);
        }
    }};
}

macro_rules! trace {
    ($($t:tt)*) => {{
        #[cfg(feature = "trace")]
        {
            $crate::console::println!($($t)*);
        }
    }};
}

pub(crate) use {debug, println, trace};

/// Handle onto the global serial port for the MP3 Trigger driver
pub struct SharedSerial;

impl serial::Write<u8> for SharedSerial {
    type Error = core::convert::Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        interrupt::free(|critical_section| {
            match CONSOLE.borrow(critical_section).borrow_mut().as_mut() {
                Some(serial) => serial::Write::write(serial, word).map_err(|error| match error {
                    nb::Error::WouldBlock => nb::Error::WouldBlock,
                    nb::Error::Other(never) => match never {},
                }),
                // Nowhere to send it
                None => Ok(()),
            }
        })
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        interrupt::free(|critical_section| {
            match CONSOLE.borrow(critical_section).borrow_mut().as_mut() {
                Some(serial) => serial::Write::flush(serial).map_err(|error| match error {
                    nb::Error::WouldBlock => nb::Error::WouldBlock,
                    nb::Error::Other(never) => match never {},
                }),
                None => Ok(()),
            }
        })
    }
}

impl serial::Read<u8> for SharedSerial {
    type Error = core::convert::Infallible;

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        interrupt::free(|critical_section| {
            match CONSOLE.borrow(critical_section).borrow_mut().as_mut() {
                Some(serial) => serial::Read::read(serial).map_err(|error| match error {
                    nb::Error::WouldBlock => nb::Error::WouldBlock,
                    nb::Error::Other(never) => match never {},
                }),
                None => Err(nb::Error::WouldBlock),
            }
        })
    }
}
