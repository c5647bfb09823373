//! WAV container decoding.
//!
//! Decodes PCM integer (8/16/24/32 bit) and IEEE float WAV data into a
//! mono [`Waveform`]. Multi-channel audio is mixed down by per-frame
//! arithmetic mean. Integer samples are converted to f64 at their native
//! magnitude; nothing is rescaled to ±1.

use std::io::Read;

use hound::{SampleFormat, WavReader};
use thiserror::Error;

use crate::waveform::Waveform;

/// Errors raised while decoding a WAV container.
///
/// Decode failures are fatal for the call: there is no recovery without
/// new input, so they are surfaced to the caller and never retried.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed or unsupported wav container: {0}")]
    Container(#[from] hound::Error),

    #[error("wav header declares zero channels")]
    NoChannels,
}

/// Decodes a WAV stream into a mono waveform.
pub fn decode<R: Read>(reader: R) -> Result<Waveform, DecodeError> {
    let mut wav = WavReader::new(reader)?;
    let spec = wav.spec();
    let channels = spec.channels as usize;
    if channels == 0 {
        return Err(DecodeError::NoChannels);
    }

    let frames = wav.len() as usize / channels;
    let mut samples = Vec::with_capacity(frames);
    match spec.sample_format {
        SampleFormat::Int => {
            mix_down(wav.samples::<i32>().map(|s| s.map(|v| v as f64)), channels, &mut samples)?;
        }
        SampleFormat::Float => {
            mix_down(wav.samples::<f32>().map(|s| s.map(|v| v as f64)), channels, &mut samples)?;
        }
    }

    Ok(Waveform::new(spec.sample_rate, samples))
}

/// Decodes an in-memory WAV container.
pub fn decode_bytes(bytes: &[u8]) -> Result<Waveform, DecodeError> {
    decode(std::io::Cursor::new(bytes))
}

fn mix_down<I>(iter: I, channels: usize, out: &mut Vec<f64>) -> Result<(), DecodeError>
where
    I: Iterator<Item = Result<f64, hound::Error>>,
{
    let mut acc = 0.0;
    let mut filled = 0;
    for sample in iter {
        acc += sample?;
        filled += 1;
        if filled == channels {
            out.push(acc / channels as f64);
            acc = 0.0;
            filled = 0;
        }
    }
    // A trailing partial frame is dropped rather than averaged short.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use std::io::Cursor;

    fn write_wav(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_decode_mono_int16_keeps_scale() {
        let bytes = write_wav(1, 16000, &[0, 16384, -16384, 32767]);
        let wave = decode_bytes(&bytes).unwrap();
        assert_eq!(wave.sample_rate(), 16000);
        assert_eq!(wave.samples(), &[0.0, 16384.0, -16384.0, 32767.0]);
    }

    #[test]
    fn test_decode_stereo_mixes_to_mono() {
        // Interleaved L/R frames: (100, 300), (-200, 200)
        let bytes = write_wav(2, 44100, &[100, 300, -200, 200]);
        let wave = decode_bytes(&bytes).unwrap();
        assert_eq!(wave.len(), 2);
        assert_eq!(wave.samples(), &[200.0, 0.0]);
    }

    #[test]
    fn test_decode_empty_data_chunk() {
        let bytes = write_wav(1, 8000, &[]);
        let wave = decode_bytes(&bytes).unwrap();
        assert!(wave.is_empty());
        assert_eq!(wave.sample_rate(), 8000);
    }

    #[test]
    fn test_decode_float_wav() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
            for s in [0.25f32, -0.75] {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        let wave = decode_bytes(&cursor.into_inner()).unwrap();
        assert_eq!(wave.samples(), &[0.25, -0.75]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_bytes(b"definitely not a riff container").unwrap_err();
        assert!(matches!(err, DecodeError::Container(_)));
    }

    #[test]
    fn test_decode_truncated_header_fails() {
        let bytes = write_wav(1, 16000, &[1, 2, 3, 4]);
        assert!(decode_bytes(&bytes[..20]).is_err());
    }
}
