//! Procedural waveform generation.
//!
//! Every cue the game plays is synthesized here as interleaved 16-bit
//! stereo samples. The generators are pure functions of their inputs.

use std::f32::consts::TAU;

/// Output rate for all generated waveforms, in Hz.
pub const SAMPLE_RATE: u32 = 22_050;

const CHANNELS: u16 = 2;
const PEAK: f32 = i16::MAX as f32;

/// A soft pop: a gentle sine (the nominal frequency softened by 0.3)
/// with a 5% linear attack and an exponential decay tail.
pub fn pop_wave(frequency: f32, duration: f32, volume: f32) -> Vec<i16> {
    let frames = (duration * SAMPLE_RATE as f32) as usize;
    let attack = frames as f32 * 0.05;
    let tone = frequency * 0.3;
    // Keep pops quiet relative to full scale
    let amplitude = volume * 0.25;

    let mut samples = Vec::with_capacity(frames * CHANNELS as usize);
    for i in 0..frames {
        let t = i as f32;
        let wave = (TAU * tone * t / SAMPLE_RATE as f32).sin();
        let envelope = if t < attack {
            t / attack
        } else {
            let decay = (t - attack) / (frames as f32 * 0.95);
            (-decay * 3.0).exp()
        };
        let value = (wave * envelope * amplitude * PEAK) as i16;
        samples.push(value);
        samples.push(value);
    }
    samples
}

/// A sustained chord: equal-weight sines with a 10% linear attack and a
/// linear release over the back half.
pub fn chord_wave(frequencies: &[f32], duration: f32) -> Vec<i16> {
    let frames = (duration * SAMPLE_RATE as f32) as usize;
    let amplitude = 0.2;

    let mut samples = Vec::with_capacity(frames * CHANNELS as usize);
    for i in 0..frames {
        let t = i as f32;
        let wave: f32 = frequencies
            .iter()
            .map(|freq| (TAU * freq * t / SAMPLE_RATE as f32).sin())
            .sum::<f32>()
            / frequencies.len() as f32;
        let envelope = if t < frames as f32 * 0.1 {
            t / (frames as f32 * 0.1)
        } else if t > frames as f32 * 0.5 {
            (frames as f32 - t) / (frames as f32 * 0.5)
        } else {
            1.0
        };
        let value = (wave * envelope * amplitude * PEAK) as i16;
        samples.push(value);
        samples.push(value);
    }
    samples
}

/// Wrap interleaved stereo samples in a minimal 16-bit PCM WAV container,
/// ready for the audio backend's decoder.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let byte_rate = sample_rate * u32::from(CHANNELS) * 2;
    let block_align = CHANNELS * 2;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_sample_count() {
        let samples = pop_wave(800.0, 0.1, 0.3);
        let frames = (0.1 * SAMPLE_RATE as f32) as usize;
        assert_eq!(samples.len(), frames * 2);
    }

    #[test]
    fn test_pop_starts_silent() {
        let samples = pop_wave(800.0, 0.1, 0.3);
        assert_eq!(samples[0], 0);
        assert_eq!(samples[1], 0);
    }

    #[test]
    fn test_pop_stereo_channels_match() {
        let samples = pop_wave(800.0, 0.1, 0.3);
        for frame in samples.chunks_exact(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn test_pop_peak_amplitude_bound() {
        let volume = 0.3;
        let bound = (volume * 0.25 * PEAK) as i16 + 1;
        let samples = pop_wave(800.0, 0.1, volume);
        assert!(samples.iter().all(|&s| s.abs() <= bound));
        // The signal is actually audible, not just within bounds
        assert!(samples.iter().any(|&s| s.abs() > bound / 2));
    }

    #[test]
    fn test_pop_decay_tail_is_quieter_than_attack_peak() {
        let samples = pop_wave(800.0, 0.2, 0.2);
        let frames = samples.len() / 2;
        let peak = |range: std::ops::Range<usize>| {
            range.map(|i| samples[i * 2].abs()).max().unwrap()
        };
        let early = peak(0..frames / 4);
        let tail = peak(frames * 3 / 4..frames);
        assert!(tail < early / 2, "tail {tail} vs early {early}");
    }

    #[test]
    fn test_chord_sample_count_and_release() {
        let samples = chord_wave(&[261.0, 329.0, 392.0], 0.6);
        let frames = (0.6 * SAMPLE_RATE as f32) as usize;
        assert_eq!(samples.len(), frames * 2);
        // Release ramps to near-silence at the very end
        let last = samples[samples.len() - 2].abs();
        assert!(last < 200, "final sample {last}");
    }

    #[test]
    fn test_chord_peak_amplitude_bound() {
        let samples = chord_wave(&[261.0, 329.0, 392.0], 0.6);
        let bound = (0.2 * PEAK) as i16 + 1;
        assert!(samples.iter().all(|&s| s.abs() <= bound));
    }

    #[test]
    fn test_wav_header_layout() {
        let samples = pop_wave(400.0, 0.1, 0.2);
        let bytes = encode_wav(&samples, SAMPLE_RATE);

        assert_eq!(bytes.len(), 44 + samples.len() * 2);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[36..40], b"data");

        let rate = u32::from_le_bytes(bytes[24..28].try_into().unwrap());
        assert_eq!(rate, SAMPLE_RATE);
        let data_len = u32::from_le_bytes(bytes[40..44].try_into().unwrap());
        assert_eq!(data_len as usize, samples.len() * 2);
    }
}
