//! Minimal RIFF/WAVE writer for 16-bit mono PCM.
//!
//! The sample count is known before anything is written, so all chunk sizes
//! are computed up front and the header never needs patching afterwards.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const NUM_CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;

/// Write `samples` to `path` as a mono 16-bit PCM wav file.
pub fn write_wav(path: &Path, samples: &[i16], sample_rate: u32) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_wav_to(&mut file, samples, sample_rate)?;
    file.flush()
}

/// Write a complete wav stream (header plus sample data) to `out`.
pub fn write_wav_to<W: Write>(out: &mut W, samples: &[i16], sample_rate: u32) -> io::Result<()> {
    let bytes_per_sample = u32::from(BITS_PER_SAMPLE / 8);
    let byte_rate = sample_rate * u32::from(NUM_CHANNELS) * bytes_per_sample;
    let block_align = NUM_CHANNELS * (BITS_PER_SAMPLE / 8);
    let data_length = samples.len() as u32 * bytes_per_sample;
    // ChunkSize = 4 + (8 + Subchunk1Size) + (8 + Subchunk2Size)
    let riff_length = 36 + data_length;

    out.write_all(b"RIFF")?;
    out.write_all(&riff_length.to_le_bytes())?;
    out.write_all(b"WAVE")?;

    out.write_all(b"fmt ")?;
    out.write_all(&16u32.to_le_bytes())?;
    out.write_all(&1u16.to_le_bytes())?; // PCM
    out.write_all(&NUM_CHANNELS.to_le_bytes())?;
    out.write_all(&sample_rate.to_le_bytes())?;
    out.write_all(&byte_rate.to_le_bytes())?;
    out.write_all(&block_align.to_le_bytes())?;
    out.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    out.write_all(b"data")?;
    out.write_all(&data_length.to_le_bytes())?;
    for sample in samples {
        out.write_all(&sample.to_le_bytes())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_bytes(samples: &[i16], sample_rate: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        write_wav_to(&mut bytes, samples, sample_rate).unwrap();
        bytes
    }

    #[test]
    fn header_is_self_consistent() {
        let data = render_bytes(&[0; 1000], 44100);

        assert_eq!(&data[0..4], b"RIFF");
        assert_eq!(&data[8..12], b"WAVE");
        assert_eq!(&data[12..16], b"fmt ");
        assert_eq!(&data[36..40], b"data");

        let riff_length = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let data_length = u32::from_le_bytes([data[40], data[41], data[42], data[43]]);
        assert_eq!(data_length, 2000);
        assert_eq!(riff_length, 36 + data_length);
        assert_eq!(data.len(), 44 + data_length as usize);
    }

    #[test]
    fn format_fields_describe_mono_16_bit_pcm() {
        let data = render_bytes(&[], 44100);

        assert_eq!(u32::from_le_bytes([data[16], data[17], data[18], data[19]]), 16);
        assert_eq!(u16::from_le_bytes([data[20], data[21]]), 1); // PCM
        assert_eq!(u16::from_le_bytes([data[22], data[23]]), 1); // mono
        assert_eq!(u32::from_le_bytes([data[24], data[25], data[26], data[27]]), 44100);
        assert_eq!(u32::from_le_bytes([data[28], data[29], data[30], data[31]]), 88200);
        assert_eq!(u16::from_le_bytes([data[32], data[33]]), 2); // block align
        assert_eq!(u16::from_le_bytes([data[34], data[35]]), 16);
    }

    #[test]
    fn samples_are_little_endian() {
        let data = render_bytes(&[i16::MAX, i16::MIN, -1], 8000);

        assert_eq!(&data[44..50], &[0xff, 0x7f, 0x00, 0x80, 0xff, 0xff]);
    }
}
