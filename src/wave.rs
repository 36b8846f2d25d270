// doremi -- a tiny score-to-wave synthesizer
// Copyright (C) 2026  Doremi contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.

//! This is the namespace for all parts dealing with data in sampled waves.

/// A mono buffer of signed 16-bit PCM samples.
///
/// The buffer is heap-allocated and sized once at render start; it is owned
/// by the render pipeline for the duration of one render and then handed
/// read-only to the container writer.
pub struct Waveform {
    samples: Vec<i16>,
}

#[allow(clippy::len_without_is_empty)]
impl Waveform {
    /// Allocate a silent waveform holding `sample_count` samples.
    pub fn new(sample_count: usize) -> Self {
        Self {
            samples: vec![0; sample_count],
        }
    }

    /// Size of the buffer in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [i16] {
        &mut self.samples
    }
}
