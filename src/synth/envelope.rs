//! Per-note attack/decay envelopes, measured in whole samples.

use crate::score::Note;

/// The envelope phase a single sample of a note falls into.
///
/// `Attack` and `Decay` carry the linear ramp factor in `[0, 1]` at that
/// sample; during `Sustain` no factor applies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase {
    Attack(f64),
    Decay(f64),
    Sustain,
}

/// The envelope geometry of one note, converted to whole samples.
///
/// # Example
///
/// ```
/// use doremi::note::{Accidental, NoteName, Pitch};
/// use doremi::score::Note;
/// use doremi::synth::envelope::{NoteEnvelope, Phase};
///
/// let note = Note {
///     begin: 0.0,
///     pitch: Pitch::new(NoteName::A, Accidental::Natural, 4),
///     duration: 1.0,
///     attack: 0.1,
///     decay: 0.5,
/// };
/// let env = NoteEnvelope::new(&note, 44100);
/// assert_eq!(env.classify(0), Phase::Attack(0.0));
/// match env.classify(4409) {
///     Phase::Attack(factor) => assert!(factor > 0.999),
///     other => panic!("expected attack, got {:?}", other),
/// }
/// assert_eq!(env.classify(20_000), Phase::Sustain);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct NoteEnvelope {
    note_start: usize,
    note_finish: usize,
    attack_duration: usize,
    attack_finish: usize,
    decay_duration: usize,
    decay_start: usize,
}

impl NoteEnvelope {
    pub fn new(note: &Note, sample_rate: u32) -> Self {
        let rate = f64::from(sample_rate);
        let note_start = (note.begin * rate).round() as usize;
        let note_finish = note_start + (note.duration * rate).round() as usize;
        let attack_duration = (note.attack * rate).round() as usize;
        let decay_duration = (note.decay * rate).round() as usize;
        NoteEnvelope {
            note_start,
            note_finish,
            attack_duration,
            attack_finish: note_start + attack_duration,
            decay_duration,
            decay_start: note_finish - decay_duration,
        }
    }

    /// First sample of the note.
    pub fn start(&self) -> usize {
        self.note_start
    }

    /// One past the last sample of the note.
    pub fn finish(&self) -> usize {
        self.note_finish
    }

    /// Classify the sample at absolute index `i`, which must lie within
    /// `start()..finish()`.
    ///
    /// Attack takes priority through `attack_finish` even inside the decay
    /// window of a short note; only samples after it can classify as decay.
    /// The ordering is part of the rendered sound and must stay as is.
    pub fn classify(&self, i: usize) -> Phase {
        if self.attack_duration > 0 && i <= self.attack_finish {
            Phase::Attack((i - self.note_start) as f64 / self.attack_duration as f64)
        } else if self.decay_duration > 0 && i >= self.decay_start {
            Phase::Decay((self.note_finish - i) as f64 / self.decay_duration as f64)
        } else {
            Phase::Sustain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{Accidental, NoteName, Pitch};

    fn note(duration: f64, attack: f64, decay: f64) -> Note {
        Note {
            begin: 0.0,
            pitch: Pitch::new(NoteName::A, Accidental::Natural, 4),
            duration,
            attack,
            decay,
        }
    }

    #[test]
    fn zero_attack_and_decay_sustain_everywhere() {
        let env = NoteEnvelope::new(&note(1.0, 0.0, 0.0), 100);
        for i in env.start()..env.finish() {
            assert_eq!(env.classify(i), Phase::Sustain);
        }
    }

    #[test]
    fn attack_ramps_up_and_decay_ramps_down() {
        // 2 s note at 100 Hz: attack over samples 0..=20, decay from 150.
        let env = NoteEnvelope::new(&note(2.0, 0.2, 0.5), 100);
        assert_eq!(env.classify(0), Phase::Attack(0.0));
        assert_eq!(env.classify(10), Phase::Attack(0.5));
        assert_eq!(env.classify(20), Phase::Attack(1.0));
        assert_eq!(env.classify(21), Phase::Sustain);
        assert_eq!(env.classify(149), Phase::Sustain);
        assert_eq!(env.classify(150), Phase::Decay(1.0));
        assert_eq!(env.classify(175), Phase::Decay(0.5));
        assert_eq!(env.classify(199), Phase::Decay(1.0 / 50.0));
    }

    #[test]
    fn attack_wins_when_windows_overlap() {
        // Short note with long envelopes: the attack window (0..=15) reaches
        // past the start of the decay window (5..20).
        let env = NoteEnvelope::new(&note(0.2, 0.15, 0.15), 100);
        assert_eq!(env.classify(10), Phase::Attack(10.0 / 15.0));
        assert_eq!(env.classify(15), Phase::Attack(1.0));
        assert_eq!(env.classify(16), Phase::Decay(4.0 / 15.0));
    }
}
