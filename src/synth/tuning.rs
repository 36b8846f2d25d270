// doremi -- a tiny score-to-wave synthesizer
// Copyright (C) 2026  Doremi contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.

use crate::note::Pitch;

/// The frequency ratio between two adjacent semitones in equal temperament,
/// the twelfth root of two.
pub fn semitone_ratio() -> f64 {
    2.0_f64.powf(1.0 / 12.0)
}

/// Defines the tuning of the synthesizer by assigning a frequency to
/// concert A4. This fixes the frequencies of all other pitches at the
/// standard tuning of 12 half-tones per octave.
///
/// # Examples
///
/// ```
/// use doremi::note::*;
/// use doremi::synth::tuning::*;
///
/// let tuning = Tuning::default();
/// let a4 = tuning.frequency(Pitch::new(NoteName::A, Accidental::Natural, 4));
/// let a5 = tuning.frequency(Pitch::new(NoteName::A, Accidental::Natural, 5));
/// assert_eq!(a4, 440.0);
/// assert!((a5 - 880.0).abs() < 1e-9);
/// ```
pub struct Tuning {
    /// The frequency assigned to A4.
    pub reference_frequency: f64,
}

impl Tuning {
    /// Return the frequency of a pitch relative to this tuning.
    ///
    /// Moving up one semitone multiplies the frequency by
    /// [`semitone_ratio`], so an octave doubles it.
    ///
    /// # Examples
    ///
    /// ```
    /// use doremi::note::*;
    /// use doremi::synth::tuning::*;
    ///
    /// let tuning = Tuning::default();
    /// let c3 = tuning.frequency(Pitch::new(NoteName::C, Accidental::Natural, 3));
    /// let c3_sharp = tuning.frequency(Pitch::new(NoteName::C, Accidental::Sharp, 3));
    /// assert!((c3_sharp / c3 - semitone_ratio()).abs() < 1e-12);
    /// ```
    pub fn frequency(&self, pitch: Pitch) -> f64 {
        self.reference_frequency * semitone_ratio().powi(pitch.semitones_from_a4())
    }
}

/// Default concert tuning, where A4 corresponds to 440 Hz.
impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            reference_frequency: 440.0,
        }
    }
}
