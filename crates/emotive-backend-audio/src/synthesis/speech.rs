//! Formant speech synthesis.
//!
//! Each word gets an equal share of the segment. Within a word, each of its
//! first three vowels gets an equal share of the word, voiced as the sum of
//! three sines at fixed multiples of the voice's base frequency. A little
//! noise stands in for consonants, each word fades in and out, and the
//! whole segment is smoothed with a short moving average.

use emotive_spec::VoiceProfile;
use rand_pcg::Pcg32;

use crate::buffer::{seconds_to_samples, AudioBuffer};
use crate::envelope::{apply_fade, attack_decay};
use crate::filter::{moving_average, SMOOTHING_WIDTH};
use crate::rng::centered_noise;

use super::{sample_time, sine, SegmentSynth};

/// Speaking pace in seconds per word.
pub const SECONDS_PER_WORD: f64 = 0.4;
/// Shortest speech segment in seconds.
pub const MIN_SPEECH_SECONDS: f64 = 0.8;
/// Length of the silence returned for blank text.
pub const BLANK_SPEECH_SAMPLES: usize = 1000;
/// Vowels voiced per word.
pub const MAX_VOWELS_PER_WORD: usize = 3;

/// Relative amplitudes of the fundamental, first and second resonance.
const PARTIAL_AMPLITUDES: [f64; 3] = [0.4, 0.3, 0.2];
/// Gain applied to each vowel after its envelope.
const VOWEL_GAIN: f64 = 0.08;
/// Peak-to-peak level of the consonant noise.
const CONSONANT_NOISE: f64 = 0.01;
/// Word fade is `len / WORD_FADE_DIVISOR` samples, capped at `MAX_WORD_FADE`.
const WORD_FADE_DIVISOR: usize = 20;
const MAX_WORD_FADE: usize = 1000;

/// The five vowel letters and their resonance ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vowel {
    /// /a/
    A,
    /// /e/
    E,
    /// /i/
    I,
    /// /o/
    O,
    /// /u/
    U,
}

impl Vowel {
    /// Classifies a character, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Vowel::A),
            'e' => Some(Vowel::E),
            'i' => Some(Vowel::I),
            'o' => Some(Vowel::O),
            'u' => Some(Vowel::U),
            _ => None,
        }
    }

    /// Multiples of the base frequency for fundamental, first and second
    /// resonance.
    pub fn ratios(&self) -> [f64; 3] {
        match self {
            Vowel::A => [1.0, 4.0, 7.0],
            Vowel::E => [1.0, 5.0, 8.0],
            Vowel::I => [1.0, 6.0, 10.0],
            Vowel::O => [1.0, 3.0, 6.0],
            Vowel::U => [1.0, 2.5, 5.0],
        }
    }

    /// Resonance frequencies in Hz for a base frequency.
    pub fn frequencies(&self, base_frequency: f64) -> [f64; 3] {
        self.ratios().map(|ratio| base_frequency * ratio)
    }
}

/// Vowels voiced for `word`: its first three vowel letters, or `a` if none.
pub fn word_vowels(word: &str) -> Vec<Vowel> {
    let vowels: Vec<Vowel> = word
        .chars()
        .filter_map(Vowel::from_char)
        .take(MAX_VOWELS_PER_WORD)
        .collect();
    if vowels.is_empty() {
        vec![Vowel::A]
    } else {
        vowels
    }
}

/// Speech segment duration in seconds for `word_count` words.
pub fn speech_duration(word_count: usize) -> f64 {
    (word_count as f64 * SECONDS_PER_WORD).max(MIN_SPEECH_SECONDS)
}

/// Formant synthesizer for one speech segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSynth {
    /// Literal segment text.
    pub text: String,
}

impl SpeechSynth {
    /// Creates a synthesizer for `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Renders one word into a slice of `len` samples.
    fn render_word(
        &self,
        word: &str,
        len: usize,
        base_frequency: f64,
        rng: &mut Pcg32,
    ) -> Vec<f64> {
        let mut out = vec![0.0; len];
        let vowels = word_vowels(word);
        let count = vowels.len();

        for (index, vowel) in vowels.iter().enumerate() {
            let start = index * len / count;
            let end = (index + 1) * len / count;
            if start >= end {
                continue;
            }

            let [f0, f1, f2] = vowel.frequencies(base_frequency);
            let envelope = attack_decay(end - start, 10, 5);
            for (offset, gain) in envelope.iter().enumerate() {
                // Word-local time axis
                let t = sample_time(start + offset);
                let voiced = PARTIAL_AMPLITUDES[0] * sine(f0, t)
                    + PARTIAL_AMPLITUDES[1] * sine(f1, t)
                    + PARTIAL_AMPLITUDES[2] * sine(f2, t);
                out[start + offset] += voiced * gain * VOWEL_GAIN;
            }
        }

        for sample in out.iter_mut() {
            *sample += CONSONANT_NOISE * centered_noise(rng);
        }

        apply_fade(&mut out, (len / WORD_FADE_DIVISOR).min(MAX_WORD_FADE));
        out
    }
}

impl SegmentSynth for SpeechSynth {
    fn render(&self, voice: &VoiceProfile, rng: &mut Pcg32) -> AudioBuffer {
        let words: Vec<&str> = self.text.split_whitespace().collect();
        if words.is_empty() {
            return AudioBuffer::silence(BLANK_SPEECH_SAMPLES);
        }

        let num_samples = seconds_to_samples(speech_duration(words.len()));
        let mut samples = vec![0.0; num_samples];

        for (index, word) in words.iter().enumerate() {
            let start = index * num_samples / words.len();
            let end = (index + 1) * num_samples / words.len();
            let rendered = self.render_word(word, end - start, voice.base_frequency, rng);
            samples[start..end].copy_from_slice(&rendered);
        }

        moving_average(&mut samples, SMOOTHING_WIDTH);
        AudioBuffer::from_f64(&samples)
    }
}
