//! Playback port: the external audio module on a byte-oriented serial link.
//!
//! The module is a SparkFun MP3 Trigger. Wire format, one command per message:
//!
//! | Command      | Bytes                  |
//! |--------------|------------------------|
//! | play 1..=9   | `T`, ASCII digit       |
//! | play 10..=255| `t`, track as one byte |
//! | start / stop | `O`                    |
//! | next         | `F`                    |
//!
//! The module answers `X` on its transmit line when a track plays to the end.
//! Whether a track is playing is read from its active-low BUSY output.

use embedded_hal::{
    blocking::delay::DelayMs,
    digital::v2::InputPin,
    serial::{Read, Write},
};

/// Gap the module needs between two commands
pub const COMMAND_GAP_MS: u16 = 10;

pub trait Playback {
    /// Play the 1-based `track`, cutting off whatever is playing.
    fn play(&mut self, track: u8);
    fn stop(&mut self);
    fn toggle(&mut self);
    fn next(&mut self);
    fn is_busy(&self) -> bool;
    /// Whether the module reported a finished track since the last call.
    fn take_finished(&mut self) -> bool {
        false
    }
}

pub struct Mp3Trigger<S, B, D> {
    serial: S,
    busy: B,
    delay: D,
    tracks: u8,
}

impl<S, B, D> Mp3Trigger<S, B, D>
where
    S: Read<u8> + Write<u8>,
    B: InputPin,
    D: DelayMs<u16>,
{
    /// `tracks` is the number of tracks on the card; anything outside
    /// `1..=tracks` is never sent.
    pub fn new(serial: S, busy: B, delay: D, tracks: u8) -> Self {
        Self {
            serial,
            busy,
            delay,
            tracks,
        }
    }

    fn send(&mut self, bytes: &[u8]) {
        for byte in bytes {
            // Nothing upstream can act on a failed write
            let _ = nb::block!(self.serial.write(*byte));
        }
        let _ = nb::block!(self.serial.flush());
    }

    pub fn release(self) -> (S, B, D) {
        (self.serial, self.busy, self.delay)
    }
}

impl<S, B, D> Playback for Mp3Trigger<S, B, D>
where
    S: Read<u8> + Write<u8>,
    B: InputPin,
    D: DelayMs<u16>,
{
    fn play(&mut self, track: u8) {
        if track == 0 || track > self.tracks {
            return;
        }

        // There is no "play this instead", so get the module idle first
        if self.is_busy() {
            self.stop();
            self.delay.delay_ms(COMMAND_GAP_MS);
        }

        match track {
            1..=9 => self.send(&[b'T', b'0' + track]),
            _ => self.send(&[b't', track]),
        }
    }

    fn stop(&mut self) {
        // `O` toggles, so only send it when there is something to stop
        if self.is_busy() {
            self.send(&[b'O']);
        }
    }

    fn toggle(&mut self) {
        self.send(&[b'O']);
    }

    fn next(&mut self) {
        self.send(&[b'F']);
    }

    /// BUSY is pulled low while a track plays.
    fn is_busy(&self) -> bool {
        self.busy.is_low().unwrap_or(false)
    }

    fn take_finished(&mut self) -> bool {
        let mut finished = false;
        while let Ok(byte) = self.serial.read() {
            finished |= byte == b'X';
        }
        finished
    }
}
