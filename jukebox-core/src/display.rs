//! What goes on the 16x2 character LCD.
//!
//! [`Screen::compose`] turns the session into two text lines plus the
//! position of the music-note glyph; [`Screen::draw`] pushes that to anything
//! implementing [`CharacterDisplay`].

use heapless::String;
use ufmt::uwrite;

use crate::{
    catalog::Catalog,
    session::{AdvisoryReason, Credits, SessionState},
};

pub const COLUMNS: usize = 16;
pub const ROWS: u8 = 2;
/// The credit counter starts here on the bottom row
pub const CREDITS_COLUMN: usize = 11;
pub const GLYPH_COLUMN: u8 = 15;
/// User glyph slot holding the music note
pub const GLYPH_SLOT: u8 = 0;

/// Eighth note, 5x8
pub const MUSIC_NOTE: [u8; 8] = [
    0b00000, 0b00100, 0b00110, 0b00101, 0b00101, 0b11100, 0b11100, 0b00000,
];

pub type Line = String<COLUMNS>;

/// Write-only character display addressed by column and row.
pub trait CharacterDisplay {
    fn clear(&mut self);
    fn set_position(&mut self, column: u8, row: u8);
    fn print(&mut self, text: &str);
    /// Write the user glyph at the current position
    fn glyph(&mut self);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    pub top: Line,
    pub bottom: Line,
    /// Bottom-row column of the music note, if shown
    pub glyph: Option<u8>,
}

/// Copy as much of `text` as fits into the line
fn push_clipped(line: &mut Line, text: &str) {
    for c in text.chars() {
        if line.push(c).is_err() {
            break;
        }
    }
}

fn line(text: &str) -> Line {
    let mut line = Line::new();
    push_clipped(&mut line, text);
    line
}

fn advisory_lines(reason: AdvisoryReason) -> (&'static str, &'static str) {
    match reason {
        AdvisoryReason::NoCredit => ("  No credits!", "Scan RFID to add"),
        AdvisoryReason::AdminEnabled => ("     ADMIN", "  MODE ENABLED"),
        AdvisoryReason::AdminDisabled => ("     ADMIN", " MODE DISABLED"),
        AdvisoryReason::ShuffleOn => ("   Shuffle ON", ""),
        AdvisoryReason::ShuffleOff => ("  Shuffle OFF", ""),
        AdvisoryReason::AdminOnly => (" Incorrect Card", "   Admin Only"),
    }
}

impl Screen {
    pub fn compose(state: &SessionState, catalog: &Catalog) -> Self {
        if let Some(advisory) = state.advisory {
            let (top, bottom) = advisory_lines(advisory.reason);
            return Self {
                top: line(top),
                bottom: line(bottom),
                glyph: None,
            };
        }

        let Some(song) = catalog.song(state.cursor) else {
            return Self::default();
        };

        // Keep a blank column between artist and credits
        let mut bottom = Line::new();
        for c in song.artist.chars().take(CREDITS_COLUMN - 1) {
            let _ = bottom.push(c);
        }
        while bottom.len() < CREDITS_COLUMN {
            let _ = bottom.push(' ');
        }
        // Can only fail by running out of columns, which just clips
        let _ = match state.credits {
            Credits::Count(credits) => uwrite!(bottom, "C:{}", credits),
            Credits::Unlimited => uwrite!(bottom, "C:I"),
        };

        Self {
            top: line(song.title),
            bottom,
            glyph: (state.selected == Some(state.cursor)).then_some(GLYPH_COLUMN),
        }
    }

    pub fn draw<D: CharacterDisplay>(&self, display: &mut D) {
        display.clear();
        display.set_position(0, 0);
        display.print(&self.top);
        display.set_position(0, 1);
        display.print(&self.bottom);
        if let Some(column) = self.glyph {
            display.set_position(column, 1);
            display.glyph();
        }
    }
}
