//! Hardware-independent core of the credit jukebox.
//!
//! Everything here talks to the board through `embedded-hal` traits so the
//! exact same code runs on the ATmega328P and in host tests. The firmware in
//! `jukebox/` owns the peripherals, installs the interrupt handlers and runs
//! the control loop:
//!
//! 1. sample the [`SoftClock`](clock::SoftClock),
//! 2. [`Frontend::collect`](frontend::Frontend::collect) the pending events,
//! 3. [`Session::step`](session::Session::step) the state machine,
//! 4. redraw the [`Screen`](display::Screen) if the step asked for it.

#![cfg_attr(not(test), no_std)]

pub mod catalog;
pub mod clock;
pub mod config;
pub mod credential;
pub mod display;
pub mod event;
pub mod frontend;
pub mod input;
pub mod playback;
pub mod session;

pub use catalog::{Catalog, Song, SONGS};
pub use clock::{elapsed, SoftClock, Ticks};
pub use config::Config;
pub use credential::{Credential, CredentialReader, Role};
pub use display::{CharacterDisplay, Screen};
pub use event::{InputEvent, Pending};
pub use frontend::Frontend;
pub use input::{AdminButton, BusyMonitor, EncoderLatch, Press, SelectButton, Step};
pub use playback::{Mp3Trigger, Playback};
pub use session::{Advisory, AdvisoryReason, Credits, Session, SessionState};
