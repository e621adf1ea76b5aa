//! Audio cues the rendering surface can play.
//!
//! The core never produces sound itself. It only describes the tone sequence
//! for a verdict and the utterance for a word; a surface without audio or
//! speech support ignores them.

use serde::{Deserialize, Serialize};

use crate::types::WordEntry;

/// Oscillator shape for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    Triangle,
    Square,
}

/// One plucked note, timed relative to the start of the cue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub frequency_hz: f64,
    pub offset_secs: f64,
    pub duration_secs: f64,
    pub waveform: Waveform,
}

impl Note {
    const fn new(frequency_hz: f64, offset_secs: f64, duration_secs: f64, waveform: Waveform) -> Self {
        Self {
            frequency_hz,
            offset_secs,
            duration_secs,
            waveform,
        }
    }
}

/// Short tone sequence signalling a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackCue {
    pub master_gain: f64,
    pub notes: Vec<Note>,
}

const MASTER_GAIN: f64 = 0.35;

// E5, G#5, B5 going up.
const CORRECT_NOTES: [Note; 3] = [
    Note::new(659.25, 0.00, 0.12, Waveform::Triangle),
    Note::new(830.61, 0.12, 0.12, Waveform::Triangle),
    Note::new(987.77, 0.24, 0.20, Waveform::Triangle),
];

// G4, E4, C4 going down.
const INCORRECT_NOTES: [Note; 3] = [
    Note::new(392.00, 0.00, 0.15, Waveform::Square),
    Note::new(329.63, 0.12, 0.15, Waveform::Square),
    Note::new(261.63, 0.24, 0.18, Waveform::Square),
];

impl FeedbackCue {
    pub fn for_verdict(correct: bool) -> Self {
        let notes = if correct { CORRECT_NOTES } else { INCORRECT_NOTES };
        Self {
            master_gain: MASTER_GAIN,
            notes: notes.to_vec(),
        }
    }
}

/// Text-to-speech request for a word's source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub lang: String,
    pub rate: f64,
    pub pitch: f64,
}

impl SpeechRequest {
    /// `None` for words without source text.
    pub fn for_word(word: &WordEntry) -> Option<Self> {
        if word.source_text.is_empty() {
            return None;
        }
        Some(Self {
            text: word.source_text.clone(),
            lang: "en-US".to_string(),
            rate: 0.95,
            pitch: 1.0,
        })
    }
}
