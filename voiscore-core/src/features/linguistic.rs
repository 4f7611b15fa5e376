//! Linguistic features: speech rate and transcript clarity.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Scalar linguistic features of one transcript.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticFeatures {
    /// Speaking tempo in words per minute; 0 for zero-duration input.
    pub speech_rate_wpm: f64,
    /// Word error rate against the reference, in percent, within [0, 100].
    pub clarity_error_pct: f64,
}

/// Extract linguistic features from a transcript hypothesis.
///
/// `reference` is the text the speaker was supposed to read. Without one
/// there is nothing to measure the transcript against, so the clarity
/// error is reported as 0 and a warning is logged.
pub fn extract_linguistic(
    transcript: &str,
    reference: Option<&str>,
    duration_secs: f64,
) -> LinguisticFeatures {
    if transcript.split_whitespace().next().is_none() {
        warn!("transcript is empty; speech rate will be 0");
    }

    let clarity_error_pct = match reference {
        Some(reference) => word_error_rate_pct(reference, transcript),
        None => {
            warn!("no reference transcript; clarity error defaults to 0");
            0.0
        }
    };

    LinguisticFeatures {
        speech_rate_wpm: speech_rate_wpm(transcript, duration_secs),
        clarity_error_pct,
    }
}

/// Words per minute: whitespace-token count over duration.
///
/// Zero-duration recordings rate as 0 WPM rather than dividing by zero.
pub fn speech_rate_wpm(transcript: &str, duration_secs: f64) -> f64 {
    if duration_secs <= 0.0 {
        warn!(duration_secs, "non-positive duration; speech rate defaults to 0");
        return 0.0;
    }
    let words = transcript.split_whitespace().count();
    words as f64 / (duration_secs / 60.0)
}

/// Word-level error rate as a percentage, clamped to [0, 100].
///
/// Levenshtein distance over whitespace tokens divided by the reference
/// length. Both sides empty means nothing was misheard (0); an empty
/// reference against a non-empty hypothesis is total mismatch (100).
pub fn word_error_rate_pct(reference: &str, hypothesis: &str) -> f64 {
    let ref_words: Vec<&str> = reference.split_whitespace().collect();
    let hyp_words: Vec<&str> = hypothesis.split_whitespace().collect();

    if ref_words.is_empty() {
        return if hyp_words.is_empty() { 0.0 } else { 100.0 };
    }

    let distance = levenshtein_words(&ref_words, &hyp_words);
    (distance as f64 / ref_words.len() as f64 * 100.0).min(100.0)
}

/// Word-level Levenshtein distance with unit costs, single-row DP.
fn levenshtein_words(reference: &[&str], hypothesis: &[&str]) -> usize {
    let mut row: Vec<usize> = (0..=hypothesis.len()).collect();

    for (i, ref_word) in reference.iter().enumerate() {
        let mut prev_diag = row[0];
        row[0] = i + 1;
        for (j, hyp_word) in hypothesis.iter().enumerate() {
            let substitution = prev_diag + usize::from(ref_word != hyp_word);
            prev_diag = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(prev_diag + 1);
        }
    }

    row[hypothesis.len()]
}
