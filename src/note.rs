// doremi -- a tiny score-to-wave synthesizer
// Copyright (C) 2026  Doremi contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.

//! Definitions of what a note's pitch is.

use snafu::Snafu;

/// The name of a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

/// Any offset applied to a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Accidental {
    /// The note is a half-tone lower than indicated by its name.
    Flat,
    /// The note is left unchanged.
    Natural,
    /// The note is a half-tone higher than indicated by its name.
    Sharp,
}

/// Errors raised while turning symbolic score data into pitches.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum PitchError {
    #[snafu(display("{:?} does not name a note in A-G", letter))]
    InvalidLetter { letter: char },
    #[snafu(display("{:?} is not an accidental (expected ' ', 'b' or '#')", symbol))]
    InvalidAccidental { symbol: char },
}

impl NoteName {
    /// Parse a single note letter, case insensitively.
    pub fn from_char(letter: char) -> Result<NoteName, PitchError> {
        match letter.to_ascii_uppercase() {
            'A' => Ok(NoteName::A),
            'B' => Ok(NoteName::B),
            'C' => Ok(NoteName::C),
            'D' => Ok(NoteName::D),
            'E' => Ok(NoteName::E),
            'F' => Ok(NoteName::F),
            'G' => Ok(NoteName::G),
            _ => InvalidLetter { letter }.fail(),
        }
    }

    /// The number of semitones this letter lies above the A of its octave
    /// on the diatonic scale.
    pub fn semitones_above_a(self) -> i32 {
        match self {
            NoteName::A => 0,
            NoteName::B => 2,
            NoteName::C => 3,
            NoteName::D => 5,
            NoteName::E => 7,
            NoteName::F => 8,
            NoteName::G => 10,
        }
    }
}

impl Accidental {
    /// Parse an accidental symbol as it appears in score data:
    /// `'b'` for flat, `' '` for natural, `'#'` for sharp.
    pub fn from_char(symbol: char) -> Result<Accidental, PitchError> {
        match symbol {
            'b' => Ok(Accidental::Flat),
            ' ' => Ok(Accidental::Natural),
            '#' => Ok(Accidental::Sharp),
            _ => InvalidAccidental { symbol }.fail(),
        }
    }

    /// The semitone adjustment this accidental applies to its note.
    pub fn semitones(self) -> i32 {
        match self {
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }
}

/// A pitch in standard notation: letter, accidental and octave number.
///
/// A value of this type always denotes a playable pitch; validation happens
/// when parsing the symbolic form via [`Pitch::from_chars`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Pitch {
    pub name: NoteName,
    pub accidental: Accidental,
    pub octave: i32,
}

impl Pitch {
    pub fn new(name: NoteName, accidental: Accidental, octave: i32) -> Pitch {
        Pitch {
            name,
            accidental,
            octave,
        }
    }

    /// Parse a pitch from the character notation used by score data.
    /// Note that different spellings may refer to the same pitch,
    /// e.g. a G♯ is the same as an A♭.
    ///
    /// # Examples
    ///
    /// ```
    /// use doremi::note::*;
    ///
    /// assert_eq!(Pitch::from_chars('A', ' ', 4), Ok(Pitch::new(NoteName::A, Accidental::Natural, 4)));
    /// assert_eq!(Pitch::from_chars('e', 'b', 3), Ok(Pitch::new(NoteName::E, Accidental::Flat, 3)));
    /// assert!(Pitch::from_chars('H', ' ', 4).is_err());
    /// assert!(Pitch::from_chars('C', '!', 4).is_err());
    /// ```
    pub fn from_chars(letter: char, accidental: char, octave: i32) -> Result<Pitch, PitchError> {
        Ok(Pitch {
            name: NoteName::from_char(letter)?,
            accidental: Accidental::from_char(accidental)?,
            octave,
        })
    }

    /// The signed semitone distance of this pitch from concert A4.
    ///
    /// # Examples
    ///
    /// ```
    /// use doremi::note::*;
    ///
    /// assert_eq!(Pitch::new(NoteName::A, Accidental::Natural, 4).semitones_from_a4(), 0);
    /// assert_eq!(Pitch::new(NoteName::A, Accidental::Natural, 5).semitones_from_a4(), 12);
    /// assert_eq!(Pitch::new(NoteName::C, Accidental::Sharp, 3).semitones_from_a4(), -8);
    /// ```
    pub fn semitones_from_a4(self) -> i32 {
        (self.octave - 4) * 12 + self.name.semitones_above_a() + self.accidental.semitones()
    }
}
