//! Gathers every input source into one [`Pending`] set per loop iteration.

use embedded_hal::{
    blocking::{
        delay::DelayMs,
        i2c::{Read, Write},
    },
    digital::v2::InputPin,
};

use crate::{
    clock::{elapsed, Ticks},
    config::Config,
    credential::CredentialReader,
    event::{InputEvent, Pending},
    input::{AdminButton, BusyMonitor, EncoderLatch, SelectButton},
    playback::Playback,
};

pub struct Frontend<'a, I2C, S, A, D> {
    encoder: &'a EncoderLatch,
    reader: CredentialReader<I2C>,
    select: SelectButton<S>,
    admin: AdminButton<A>,
    busy: BusyMonitor,
    delay: D,
    holdoff_ticks: Ticks,
    last_credential_at: Option<Ticks>,
}

impl<'a, I2C, E, S, A, D> Frontend<'a, I2C, S, A, D>
where
    I2C: Read<Error = E> + Write<Error = E>,
    S: InputPin,
    A: InputPin,
    D: DelayMs<u16>,
{
    pub fn new(
        encoder: &'a EncoderLatch,
        reader: CredentialReader<I2C>,
        select: S,
        admin: A,
        delay: D,
        config: &Config,
    ) -> Self {
        Self {
            encoder,
            reader,
            select: SelectButton::new(select, config.settle_ms),
            admin: AdminButton::new(admin, config.settle_ms, config.long_press_ticks),
            busy: BusyMonitor::new(),
            delay,
            holdoff_ticks: config.credential_holdoff_ticks,
            last_credential_at: None,
        }
    }

    pub fn collect<P: Playback>(&mut self, now: Ticks, player: &mut P) -> Pending {
        let mut pending = Pending::default();

        let holding_off = self
            .last_credential_at
            .is_some_and(|at| elapsed(now, at) < self.holdoff_ticks);
        if !holding_off {
            if let Some(credential) = self.reader.scan() {
                self.last_credential_at = Some(now);
                pending.record(InputEvent::CredentialSeen(credential));
            }
        }

        if let Some(press) = self.admin.poll(now, &mut self.delay) {
            pending.record(InputEvent::AdminPressed(press));
        }
        if self.select.pressed(&mut self.delay) {
            pending.record(InputEvent::SelectPressed);
        }
        if let Some(step) = self.encoder.take() {
            pending.record(InputEvent::EncoderStep(step));
        }

        // Both paths are always polled so neither goes stale
        let went_idle = self.busy.went_idle(player.is_busy());
        let finished = player.take_finished();
        if went_idle || finished {
            pending.record(InputEvent::ModuleIdleEdge);
        }

        pending
    }
}
