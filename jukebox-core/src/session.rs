//! The jukebox session: browsing cursor, committed selection, credits and the
//! admin, shuffle and advisory modes.
//!
//! Several modes can be active at once, so there is no single state enum.
//! [`Session::step`] runs once per loop iteration over everything that is
//! pending and applies, in order:
//!
//! 1. credential scans (admin toggle, member credit),
//! 2. admin button short press: stop,
//! 3. admin button long press: toggle shuffle,
//! 4. select: spend a credit and play the song under the cursor,
//! 5. encoder steps,
//! 6. snap the cursor back to the selected song after idle browsing,
//! 7. shuffle auto-advance when the module finishes a track,
//! 8. advisory expiry.
//!
//! It returns whether anything visible changed, so the caller redraws at most
//! once per iteration.

use rand::{Rng, RngCore};
use ufmt::derive::uDebug;

use crate::{
    catalog::Catalog,
    clock::{elapsed, Ticks},
    config::Config,
    credential::{Credential, Role},
    event::Pending,
    input::{Press, Step},
    playback::Playback,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum Credits {
    Count(u8),
    /// Only while in admin mode
    Unlimited,
}

impl Credits {
    pub fn available(&self) -> bool {
        !matches!(self, Credits::Count(0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum AdvisoryReason {
    NoCredit,
    AdminEnabled,
    AdminDisabled,
    ShuffleOn,
    ShuffleOff,
    /// Member badge scanned while in admin mode
    AdminOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advisory {
    pub reason: AdvisoryReason,
    pub raised_at: Ticks,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub cursor: u8,
    pub selected: Option<u8>,
    pub credits: Credits,
    pub admin: bool,
    pub shuffle: bool,
    pub advisory: Option<Advisory>,
}

pub struct Session<R> {
    state: SessionState,
    catalog: Catalog,
    config: Config,
    rng: R,
    /// Numeric balance to restore when admin mode ends
    stashed_credits: u8,
    last_moved_at: Ticks,
    last_advance_at: Option<Ticks>,
}

impl<R: RngCore> Session<R> {
    pub fn new(catalog: Catalog, config: Config, rng: R) -> Self {
        let starting_credits = config.starting_credits.min(config.credit_ceiling);
        Self {
            state: SessionState {
                cursor: 0,
                selected: None,
                credits: Credits::Count(starting_credits),
                admin: false,
                shuffle: false,
                advisory: None,
            },
            catalog,
            config,
            rng,
            stashed_credits: starting_credits,
            last_moved_at: 0,
            last_advance_at: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn step<P: Playback>(&mut self, now: Ticks, pending: &Pending, player: &mut P) -> bool {
        let mut redraw = false;

        if let Some(credential) = pending.credential {
            redraw |= self.on_credential(now, credential);
        }
        if let Some(press) = pending.admin {
            redraw |= self.on_admin_press(now, press, player);
        }
        if pending.select {
            redraw |= self.on_select(now, player);
        }
        if let Some(step) = pending.step {
            redraw |= self.on_step(now, step);
        }
        redraw |= self.snap_back(now);
        redraw |= self.shuffle_advance(now, pending.module_idle, player);
        redraw |= self.expire_advisory(now);

        redraw
    }

    fn raise(&mut self, now: Ticks, reason: AdvisoryReason) {
        self.state.advisory = Some(Advisory {
            reason,
            raised_at: now,
        });
    }

    fn on_credential(&mut self, now: Ticks, credential: Credential) -> bool {
        match (credential.role(), self.state.admin) {
            (Role::Admin, false) => {
                if let Credits::Count(credits) = self.state.credits {
                    self.stashed_credits = credits;
                }
                self.state.credits = Credits::Unlimited;
                self.state.admin = true;
                self.raise(now, AdvisoryReason::AdminEnabled);
            }
            (Role::Admin, true) => {
                self.state.credits = Credits::Count(self.stashed_credits);
                self.state.admin = false;
                self.state.shuffle = false;
                self.raise(now, AdvisoryReason::AdminDisabled);
            }
            (Role::Member, false) => {
                if let Credits::Count(credits) = self.state.credits {
                    if credits < self.config.credit_ceiling {
                        self.state.credits = Credits::Count(credits + 1);
                    }
                }
            }
            (Role::Member, true) => self.raise(now, AdvisoryReason::AdminOnly),
            (Role::Unknown, _) => return false,
        }
        true
    }

    fn on_admin_press<P: Playback>(&mut self, now: Ticks, press: Press, player: &mut P) -> bool {
        if !self.state.admin {
            return false;
        }
        match press {
            Press::Short => player.stop(),
            Press::Long => {
                self.state.shuffle = !self.state.shuffle;
                if self.state.shuffle {
                    self.raise(now, AdvisoryReason::ShuffleOn);
                    if !player.is_busy() {
                        self.shuffle_pick(now, player);
                    }
                } else {
                    self.raise(now, AdvisoryReason::ShuffleOff);
                }
            }
        }
        true
    }

    fn on_select<P: Playback>(&mut self, now: Ticks, player: &mut P) -> bool {
        if !self.state.admin && !self.state.credits.available() {
            self.raise(now, AdvisoryReason::NoCredit);
            return true;
        }
        if let Credits::Count(credits) = self.state.credits {
            self.state.credits = Credits::Count(credits - 1);
        }
        self.state.selected = Some(self.state.cursor);
        player.play(self.state.cursor + 1);
        true
    }

    fn on_step(&mut self, now: Ticks, step: Step) -> bool {
        self.state.cursor = self.catalog.step(self.state.cursor, step);
        self.last_moved_at = now;
        true
    }

    fn snap_back(&mut self, now: Ticks) -> bool {
        match self.state.selected {
            Some(selected)
                if selected != self.state.cursor
                    && elapsed(now, self.last_moved_at) >= self.config.snap_back_ticks =>
            {
                self.state.cursor = selected;
                self.last_moved_at = now;
                true
            }
            _ => false,
        }
    }

    /// A finished track can be reported twice, once by the BUSY edge and once
    /// by the module's notice, in neighbouring iterations. Anything within
    /// `shuffle_interval_ticks` of the last pick is that echo and is dropped.
    fn shuffle_advance<P: Playback>(&mut self, now: Ticks, module_idle: bool, player: &mut P) -> bool {
        if !self.state.shuffle || !module_idle {
            return false;
        }
        let echo = self
            .last_advance_at
            .is_some_and(|at| elapsed(now, at) <= self.config.shuffle_interval_ticks);
        if echo {
            return false;
        }
        self.shuffle_pick(now, player);
        true
    }

    /// Uniform pick over the catalog; cursor and selection both follow it.
    fn shuffle_pick<P: Playback>(&mut self, now: Ticks, player: &mut P) {
        let index = self.rng.gen_range(0..self.catalog.len());
        self.state.cursor = index;
        self.state.selected = Some(index);
        self.last_advance_at = Some(now);
        player.play(index + 1);
    }

    fn expire_advisory(&mut self, now: Ticks) -> bool {
        match self.state.advisory {
            Some(advisory) if elapsed(now, advisory.raised_at) >= self.config.advisory_ticks => {
                self.state.advisory = None;
                true
            }
            _ => false,
        }
    }
}
