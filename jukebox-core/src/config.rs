//! Behavioural constants. Durations are in clock ticks unless suffixed.

use crate::clock::Ticks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Credits granted at power-up
    pub starting_credits: u8,
    /// Member scans never push the balance past this
    pub credit_ceiling: u8,
    /// Admin button held at least this long is a long press
    pub long_press_ticks: Ticks,
    /// Idle browsing time before the cursor returns to the selected song
    pub snap_back_ticks: Ticks,
    /// Lifetime of an advisory on the display
    pub advisory_ticks: Ticks,
    /// Idle signals this soon after a shuffle pick belong to the track it replaced
    pub shuffle_interval_ticks: Ticks,
    /// Reads are ignored for this long after a credential is accepted
    pub credential_holdoff_ticks: Ticks,
    /// Mechanical settle time for button edges
    pub settle_ms: u16,
}

impl Config {
    pub const DEFAULT: Config = Config {
        starting_credits: 3,
        credit_ceiling: 254,
        long_press_ticks: 2,
        snap_back_ticks: 10,
        advisory_ticks: 3,
        shuffle_interval_ticks: 1,
        credential_holdoff_ticks: 2,
        settle_ms: 50,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
