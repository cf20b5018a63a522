//! Bench stand-ins for the board: badge reader, buttons, BUSY line, serial
//! wire and delay, all behind the same `embedded-hal` traits the firmware
//! uses.

#![allow(dead_code)]

use std::{cell::Cell, cell::RefCell, collections::VecDeque, convert::Infallible, rc::Rc};

use embedded_hal::{
    blocking::{
        delay::DelayMs,
        i2c::{Read, Write},
    },
    digital::v2::InputPin,
    serial,
};
use jukebox_core::{
    config::Config, Catalog, Credential, CredentialReader, EncoderLatch, Frontend, Mp3Trigger,
    Session,
};
use rand::{rngs::SmallRng, SeedableRng};

#[derive(Debug)]
pub struct Nack;

/// Badge reader. A badge placed on it is reported on every read until removed.
#[derive(Clone, Default)]
pub struct Badge(Rc<Cell<Option<Credential>>>);

impl Badge {
    pub fn place(&self, credential: Credential) {
        self.0.set(Some(credential));
    }

    pub fn remove(&self) {
        self.0.set(None);
    }
}

impl Write for Badge {
    type Error = Nack;
    fn write(&mut self, _address: u8, _bytes: &[u8]) -> Result<(), Nack> {
        Ok(())
    }
}

impl Read for Badge {
    type Error = Nack;
    fn read(&mut self, _address: u8, buffer: &mut [u8]) -> Result<(), Nack> {
        match self.0.get() {
            Some(credential) => buffer.copy_from_slice(&credential.0),
            None => buffer.fill(0),
        }
        Ok(())
    }
}

/// Active-low input. `set(true)` means held down, or busy for the BUSY line.
#[derive(Clone, Default)]
pub struct Line(Rc<Cell<bool>>);

impl Line {
    pub fn set(&self, active: bool) {
        self.0.set(active);
    }
}

impl InputPin for Line {
    type Error = Infallible;
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }
}

/// Both directions of the audio module's serial link.
#[derive(Clone, Default)]
pub struct Wire {
    pub sent: Rc<RefCell<Vec<u8>>>,
    pub incoming: Rc<RefCell<VecDeque<u8>>>,
}

impl Wire {
    pub fn take_sent(&self) -> Vec<u8> {
        self.sent.borrow_mut().drain(..).collect()
    }
}

impl serial::Write<u8> for Wire {
    type Error = Infallible;
    fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
        self.sent.borrow_mut().push(word);
        Ok(())
    }
    fn flush(&mut self) -> nb::Result<(), Infallible> {
        Ok(())
    }
}

impl serial::Read<u8> for Wire {
    type Error = Infallible;
    fn read(&mut self) -> nb::Result<u8, Infallible> {
        self.incoming
            .borrow_mut()
            .pop_front()
            .ok_or(nb::Error::WouldBlock)
    }
}

#[derive(Clone, Copy, Default)]
pub struct NoDelay;

impl DelayMs<u16> for NoDelay {
    fn delay_ms(&mut self, _ms: u16) {}
}

pub type Player = Mp3Trigger<Wire, Line, NoDelay>;

/// A whole jukebox wired to fakes. Drive it by poking the handles and
/// calling [`Bench::run`].
pub struct Bench {
    pub badge: Badge,
    pub select: Line,
    pub admin: Line,
    pub busy: Line,
    pub wire: Wire,
    pub encoder: &'static EncoderLatch,
    pub frontend: Frontend<'static, Badge, Line, Line, NoDelay>,
    pub session: Session<SmallRng>,
    pub player: Player,
    pub redraws: usize,
}

impl Bench {
    pub fn new(config: Config) -> Self {
        let badge = Badge::default();
        let select = Line::default();
        let admin = Line::default();
        let busy = Line::default();
        let wire = Wire::default();
        let encoder: &'static EncoderLatch = Box::leak(Box::new(EncoderLatch::new()));
        let catalog = Catalog::DEFAULT;

        Self {
            frontend: Frontend::new(
                encoder,
                CredentialReader::new(badge.clone()),
                select.clone(),
                admin.clone(),
                NoDelay,
                &config,
            ),
            session: Session::new(catalog, config, SmallRng::seed_from_u64(13)),
            player: Mp3Trigger::new(wire.clone(), busy.clone(), NoDelay, catalog.len()),
            badge,
            select,
            admin,
            busy,
            wire,
            encoder,
            redraws: 0,
        }
    }

    /// One pass of the control loop at time `now`
    pub fn run(&mut self, now: u32) -> bool {
        let pending = self.frontend.collect(now, &mut self.player);
        let redraw = self.session.step(now, &pending, &mut self.player);
        if redraw {
            self.redraws += 1;
        }
        redraw
    }

    pub fn turn(&mut self, forward: bool, now: u32) {
        // Forward when the phases differ at the edge
        self.encoder.on_edge(true, !forward);
        self.run(now);
    }

    pub fn press_select(&mut self, now: u32) {
        self.select.set(true);
        self.run(now);
        self.select.set(false);
        self.run(now);
    }

    pub fn hold_admin(&mut self, from: u32, to: u32) {
        self.admin.set(true);
        self.run(from);
        self.admin.set(false);
        self.run(to);
    }

    pub fn scan(&mut self, credential: Credential, now: u32) {
        self.badge.place(credential);
        self.run(now);
        self.badge.remove();
    }
}
