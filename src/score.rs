// doremi -- a tiny score-to-wave synthesizer
// Copyright (C) 2026  Doremi contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.

//! High-level description of the passage to synthesize.

use crate::note::Pitch;

/// A single note of the score.
///
/// Timing is measured in seconds from the start of the waveform.
/// `attack` and `decay` must each be at most `duration`; the caller is
/// responsible for upholding this when constructing score data.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Note {
    /// When the note starts sounding.
    pub begin: f64,
    /// What pitch it sounds at.
    pub pitch: Pitch,
    /// How long it sounds, must be positive.
    pub duration: f64,
    /// Fade-in length at the start of the note, may be zero.
    pub attack: f64,
    /// Fade-out length at the end of the note, may be zero.
    pub decay: f64,
}

impl Note {
    /// When the note stops sounding.
    pub fn end(&self) -> f64 {
        self.begin + self.duration
    }
}

/// An ordered sequence of notes.
///
/// The order is significant: notes are mixed into the waveform one after
/// another and the mix is not commutative, so reordering the score changes
/// the rendered sound. Overlapping notes are permitted and expected.
#[derive(Clone, Debug, Default)]
pub struct Score {
    pub notes: Vec<Note>,
}

impl Score {
    /// Seconds from the waveform origin until the last note ends.
    ///
    /// The waveform a score is rendered into must be at least this long.
    pub fn duration(&self) -> f64 {
        self.notes.iter().map(|n| n.end()).fold(0.0, f64::max)
    }
}
