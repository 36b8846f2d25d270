// doremi -- a tiny score-to-wave synthesizer
// Copyright (C) 2026  Doremi contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.

//! The glue responsible for turning score data into an actual waveform.

use std::f64::consts::PI;

use log::{info, trace};
use snafu::{ensure, Snafu};

use crate::note::Pitch;
use crate::score::{Note, Score};
use crate::synth::envelope::NoteEnvelope;
use crate::synth::mixer;
use crate::synth::tuning::Tuning;
use crate::wave::Waveform;

/// Peak amplitude of a single rendered note, leaving 5% headroom below the
/// full 16-bit scale.
pub const PEAK_VOLUME: f64 = 0.95 * mixer::MAX_AMPLITUDE;

/// How the waveform is sampled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Samples per second of the generated audio signal.
    pub sample_rate: u32,
    /// Length of the waveform in seconds. Must cover every note of the
    /// score, i.e. be at least [`Score::duration`].
    pub total_duration: f64,
}

#[derive(Debug, Snafu)]
pub enum RenderError {
    #[snafu(display(
        "note {:?} ends at sample {} but the waveform only holds {} samples",
        pitch,
        note_finish,
        waveform_len
    ))]
    OutOfBoundsNote {
        pitch: Pitch,
        note_finish: usize,
        waveform_len: usize,
    },
}

/// Render a whole score into a freshly allocated waveform.
///
/// Notes are rendered strictly in score order in a single sequential pass;
/// each note blends into whatever earlier notes already wrote, so the order
/// of the score is audible in the result.
pub fn render(score: &Score, settings: &RenderSettings) -> Result<Waveform, RenderError> {
    let samples_total =
        (f64::from(settings.sample_rate) * settings.total_duration).round() as usize;
    let mut waveform = Waveform::new(samples_total);
    let tuning = Tuning::default();

    info!(
        "rendering {} notes into {} samples ({:.2} seconds at {} Hz)",
        score.notes.len(),
        samples_total,
        settings.total_duration,
        settings.sample_rate
    );

    for note in &score.notes {
        let frequency = tuning.frequency(note.pitch);
        trace!(
            "{:9.3}s: {:?} at {:.2} Hz for {:.2}s",
            note.begin,
            note.pitch,
            frequency,
            note.duration
        );
        render_note(note, frequency, settings.sample_rate, &mut waveform)?;
    }

    Ok(waveform)
}

/// Synthesize one note's sinusoid into the waveform over its sample range.
///
/// Every sample is a read-modify-write of the shared buffer: the raw sine
/// amplitude is blended with the existing value according to the envelope
/// phase at that sample, then narrowed back to 16 bits.
pub fn render_note(
    note: &Note,
    frequency: f64,
    sample_rate: u32,
    waveform: &mut Waveform,
) -> Result<(), RenderError> {
    let envelope = NoteEnvelope::new(note, sample_rate);
    ensure!(
        envelope.finish() <= waveform.len(),
        OutOfBoundsNote {
            pitch: note.pitch,
            note_finish: envelope.finish(),
            waveform_len: waveform.len(),
        }
    );

    let rate = f64::from(sample_rate);
    let samples = waveform.samples_mut();
    for i in envelope.start()..envelope.finish() {
        let t = i as f64 / rate;
        let raw = PEAK_VOLUME * (frequency * t * 2.0 * PI).sin();
        let mixed = mixer::mix(f64::from(samples[i]), raw, envelope.classify(i));
        samples[i] = mixer::quantize(mixed);
    }

    Ok(())
}
