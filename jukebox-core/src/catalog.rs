//! The song library. Fixed at build time, read-only afterwards.

use crate::input::Step;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Song {
    pub title: &'static str,
    pub artist: &'static str,
}

impl Song {
    pub const fn new(title: &'static str, artist: &'static str) -> Self {
        Self { title, artist }
    }
}

/// Track `n` on the audio module's card is `SONGS[n - 1]`.
pub const SONGS: [Song; 10] = [
    Song::new("Go Robot", "RHCP"),
    Song::new("Migra", "Santana"),
    Song::new("Expresso", "Sabrina"),
    Song::new("Sticky", "TylerTC"),
    Song::new("Judas", "Lady Gaga"),
    Song::new("Let It Be", "The Beatles"),
    Song::new("Africa", "Toto"),
    Song::new("Sweet Child", "Guns N' R"),
    Song::new("Thunderstruck", "AC/DC"),
    Song::new("Yesterday", "The Beatles"),
];

#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    songs: &'static [Song],
}

impl Catalog {
    pub const DEFAULT: Catalog = Catalog::new(&SONGS);

    /// Track numbers are a single byte on the wire, so at most 255 songs.
    pub const fn new(songs: &'static [Song]) -> Self {
        assert!(!songs.is_empty(), "catalog must not be empty");
        assert!(songs.len() <= 255, "catalog holds at most 255 songs");
        Self { songs }
    }

    pub fn len(&self) -> u8 {
        self.songs.len() as u8
    }

    /// Always false, `new` rejects an empty song table.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn song(&self, index: u8) -> Option<&Song> {
        self.songs.get(index as usize)
    }

    /// Move `index` one step around the catalog, wrapping at both ends.
    pub fn step(&self, index: u8, step: Step) -> u8 {
        let len = self.len();
        match step {
            Step::Forward => {
                if index >= len - 1 {
                    0
                } else {
                    index + 1
                }
            }
            Step::Backward => {
                if index == 0 || index >= len {
                    len - 1
                } else {
                    index - 1
                }
            }
        }
    }
}
