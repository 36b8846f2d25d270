// doremi -- a tiny score-to-wave synthesizer
// Copyright (C) 2026  Doremi contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.

//! `doremi` renders its built-in do-re-mi passage into a wav file.

use std::io;
use std::path::PathBuf;

use log::info;
use structopt::StructOpt;

use doremi::note::{Pitch, PitchError};
use doremi::output::wav;
use doremi::render::{self, RenderSettings};
use doremi::score::{Note, Score};

#[derive(Debug, StructOpt)]
#[structopt(name = "doremi", about = "Rendering a score into sound")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Output wav file.
    #[structopt(short, long, parse(from_os_str), default_value = "output.wav")]
    output: PathBuf,

    /// Length of the waveform in seconds; must cover the end of the last note.
    #[structopt(long, default_value = "5.0")]
    duration: f64,

    /// Samples per second of the rendered waveform.
    #[structopt(long, default_value = "44100")]
    sample_rate: u32,
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).unwrap();

    let score = demo_score().map_err(invalid_data)?;
    info!("score spans {:.2} seconds", score.duration());

    let settings = RenderSettings {
        sample_rate: opt.sample_rate,
        total_duration: opt.duration,
    };
    let waveform = render::render(&score, &settings).map_err(invalid_data)?;

    wav::write_wav(&opt.output, waveform.samples(), opt.sample_rate)?;
    info!("wrote {}", opt.output.display());
    Ok(())
}

fn invalid_data<E>(err: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidData, err)
}

/// The classic passage: an ascending run from C3 up to C4, followed by a
/// staggered C major chord.
fn demo_score() -> Result<Score, PitchError> {
    // (begin, letter, accidental, octave, duration, attack, decay)
    let data = [
        (0.00, 'C', ' ', 3, 1.0, 0.1, 0.5),
        (0.25, 'D', ' ', 3, 1.0, 0.1, 0.5),
        (0.50, 'E', 'b', 3, 1.0, 0.1, 0.5),
        (0.75, 'F', ' ', 3, 1.0, 0.1, 0.5),
        (1.00, 'G', ' ', 3, 1.0, 0.1, 0.5),
        (1.25, 'A', 'b', 4, 1.0, 0.1, 0.5),
        (1.50, 'B', 'b', 4, 1.0, 0.1, 0.5),
        (1.75, 'C', ' ', 4, 1.0, 0.1, 0.5),
        (2.50, 'C', ' ', 3, 2.0, 0.1, 1.0),
        (2.55, 'G', ' ', 3, 2.0, 0.1, 1.0),
        (2.60, 'C', ' ', 4, 2.0, 0.1, 1.0),
    ];

    let mut notes = Vec::with_capacity(data.len());
    for &(begin, letter, accidental, octave, duration, attack, decay) in &data {
        notes.push(Note {
            begin,
            pitch: Pitch::from_chars(letter, accidental, octave)?,
            duration,
            attack,
            decay,
        });
    }
    Ok(Score { notes })
}
