//! Sound cue contract.
//!
//! The toy only needs three cues: a looping buzz while dragging and two
//! one-shots for the SOLVE/TANGLED commands.  Playback itself is an external
//! collaborator's concern; the app talks to a [`AudioSink`] injected through
//! [`crate::config::UntangleConfig`] and falls back to [`NullAudio`].

/// The three sound cues the toy emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Looping buzz while a dot is being dragged.
    Buzz,
    /// One-shot cue on the SOLVE command.
    Solve,
    /// One-shot cue on the TANGLED (reset) command.
    Pop,
}

/// Sink for sound cues.
///
/// Implementations must make [`AudioSink::start_loop`] idempotent: starting a
/// loop that is already playing must not restart it.  [`AudioSink::stop_loop`]
/// with no loop playing is a no-op.
pub trait AudioSink {
    /// Play a one-shot cue.
    fn play(&mut self, cue: SoundCue);
    /// Start looping a cue; no-op if that cue is already looping.
    fn start_loop(&mut self, cue: SoundCue);
    /// Stop a looping cue; no-op if it is not looping.
    fn stop_loop(&mut self, cue: SoundCue);
}

/// Default sink used when no audio backend is injected: tracks loop state so
/// the idempotency contract still holds, and logs cues at debug level.
#[derive(Debug, Default)]
pub struct NullAudio {
    looping: Option<SoundCue>,
}

impl NullAudio {
    pub fn is_looping(&self, cue: SoundCue) -> bool {
        self.looping == Some(cue)
    }
}

impl AudioSink for NullAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio cue: {cue:?}");
    }

    fn start_loop(&mut self, cue: SoundCue) {
        if self.looping != Some(cue) {
            log::debug!("audio loop start: {cue:?}");
            self.looping = Some(cue);
        }
    }

    fn stop_loop(&mut self, cue: SoundCue) {
        if self.looping == Some(cue) {
            self.looping = None;
            log::debug!("audio loop stop: {cue:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_loop_is_idempotent() {
        let mut sink = NullAudio::default();
        sink.start_loop(SoundCue::Buzz);
        sink.start_loop(SoundCue::Buzz);
        assert!(sink.is_looping(SoundCue::Buzz));
        sink.stop_loop(SoundCue::Buzz);
        assert!(!sink.is_looping(SoundCue::Buzz));
    }

    #[test]
    fn stop_loop_without_a_loop_is_a_no_op() {
        let mut sink = NullAudio::default();
        sink.stop_loop(SoundCue::Buzz);
        assert!(!sink.is_looping(SoundCue::Buzz));
    }
}
