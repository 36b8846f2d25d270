//! Phase-aware mixing of one note's samples into the shared waveform.

use super::envelope::Phase;

/// Largest amplitude magnitude the mix may produce before storage.
pub const MAX_AMPLITUDE: f64 = 32768.0;

/// Blend a note's raw sample with what the waveform already holds at that
/// index, returning the new value for the slot.
///
/// During attack and decay the ramp factor both scales the incoming sample
/// and reduces the overall gain with `0.95 - 0.5 * factor`, which keeps the
/// blend free of clicks where envelopes of neighbouring notes overlap.
/// During sustain the two signals are averaged. The exact coefficients are
/// part of the instrument's sound.
///
/// The result saturates at `±`[`MAX_AMPLITUDE`].
///
/// # Examples
///
/// ```
/// use doremi::synth::envelope::Phase;
/// use doremi::synth::mixer::mix;
///
/// assert_eq!(mix(0.0, 1000.0, Phase::Sustain), 500.0);
/// assert_eq!(mix(0.0, 1000.0, Phase::Attack(0.5)), 350.0);
/// ```
pub fn mix(existing: f64, sample: f64, phase: Phase) -> f64 {
    let mixed = match phase {
        Phase::Attack(factor) | Phase::Decay(factor) => {
            (existing + sample * factor) * (0.95 - 0.5 * factor)
        }
        Phase::Sustain => (existing + sample) * 0.5,
    };
    mixed.min(MAX_AMPLITUDE).max(-MAX_AMPLITUDE)
}

/// Narrow a mixed value to the 16-bit storage width of the waveform,
/// rounding to the nearest sample value and saturating at the ends of the
/// representable range.
pub fn quantize(value: f64) -> i16 {
    value.round() as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sustain_mix_is_order_dependent() {
        // Two equal notes landing on the same silent slot one after another.
        let v = 1000.0;
        let first = mix(0.0, v, Phase::Sustain);
        assert_eq!(first, v * 0.5);
        let second = mix(first, v, Phase::Sustain);
        assert_eq!(second, ((v * 0.5) + v) * 0.5);
    }

    #[test]
    fn attack_and_decay_share_the_gain_curve() {
        let attack = mix(100.0, 1000.0, Phase::Attack(0.25));
        let decay = mix(100.0, 1000.0, Phase::Decay(0.25));
        assert_eq!(attack, decay);
        assert_eq!(attack, (100.0 + 1000.0 * 0.25) * (0.95 - 0.5 * 0.25));
    }

    #[test]
    fn mix_saturates_at_max_amplitude() {
        assert_eq!(mix(40000.0, 40000.0, Phase::Sustain), MAX_AMPLITUDE);
        assert_eq!(mix(-40000.0, -40000.0, Phase::Sustain), -MAX_AMPLITUDE);
    }

    #[test]
    fn quantize_saturates_at_storage_width() {
        assert_eq!(quantize(MAX_AMPLITUDE), i16::MAX);
        assert_eq!(quantize(-MAX_AMPLITUDE), i16::MIN);
        assert_eq!(quantize(0.4), 0);
        assert_eq!(quantize(-1.5), -2);
    }
}
