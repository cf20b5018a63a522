//! HD44780 character LCD behind [`CharacterDisplay`]

use ag_lcd::{Cursor, Display, LcdDisplay, Lines};
use arduino_hal::Delay;
use jukebox_core::{
    display::{GLYPH_SLOT, MUSIC_NOTE},
    CharacterDisplay,
};

use crate::pins::character_lcd::Pin;

pub struct CharacterLcd {
    lcd: LcdDisplay<Pin, Delay>,
}

impl CharacterLcd {
    /// 4-bit bus, two lines, no cursor, with the music note loaded
    pub fn new(rs: Pin, enable: Pin, db4: Pin, db5: Pin, db6: Pin, db7: Pin) -> Self {
        let mut lcd = LcdDisplay::new(rs, enable, Delay::new())
            .with_half_bus(db4, db5, db6, db7)
            .with_display(Display::On)
            .with_cursor(Cursor::Off)
            .with_lines(Lines::TwoLines)
            .build();
        lcd.set_character(GLYPH_SLOT, MUSIC_NOTE);
        lcd.clear();
        Self { lcd }
    }
}

impl CharacterDisplay for CharacterLcd {
    fn clear(&mut self) {
        self.lcd.clear();
    }

    fn set_position(&mut self, column: u8, row: u8) {
        self.lcd.set_position(column, row);
    }

    fn print(&mut self, text: &str) {
        self.lcd.print(text);
    }

    fn glyph(&mut self) {
        self.lcd.write(GLYPH_SLOT);
    }
}
