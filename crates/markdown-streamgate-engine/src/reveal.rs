//! Paced reveal of committed-safe text.
//!
//! Cosmetic only: fragments a safe snapshot into delimiter-bounded chunks
//! that the host reveals on its own timer. The sequence is lazy, finite and
//! restartable; nothing here schedules anything itself.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

/// Default boundary for [`RevealMode::Sentence`]: sentence-ending
/// punctuation (latin and CJK) followed by whitespace.
pub const SENTENCE_PATTERN: &str = r"[.!?…。！？]+\s+";

/// [`RevealMode::Word`] units: one ideograph at a time for han/kana/hangul
/// scripts, whitespace-delimited words for everything else.
const WORD_PATTERN: &str = r"[\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}]|[^\s\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}]+\s*|\s+";

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(WORD_PATTERN).expect("word pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    #[default]
    Sentence,
    Word,
}

#[derive(Debug, Clone)]
pub struct RevealConfig {
    pub mode: RevealMode,
    /// Custom boundary pattern for `Sentence` mode; `None` uses
    /// [`SENTENCE_PATTERN`].
    pub pattern: Option<String>,
    /// Position-indexed delays; indexes past the end clamp to the last
    /// entry.
    pub delays: Vec<Duration>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            mode: RevealMode::Sentence,
            pattern: None,
            delays: vec![Duration::from_millis(50)],
        }
    }
}

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("invalid reveal boundary pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// One host-driven reveal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStep {
    /// Snapshot of everything revealed so far.
    pub text: String,
    /// How long the host should wait before showing this step.
    pub delay: Duration,
}

/// Splits `text` into reveal steps according to `config`.
///
/// The only fallible entry point in this module, and only for a caller-
/// supplied pattern that does not compile.
pub fn schedule(text: &str, config: &RevealConfig) -> Result<RevealSequence, RevealError> {
    let mut cuts: Vec<usize> = match config.mode {
        RevealMode::Sentence => {
            let pattern = config.pattern.as_deref().unwrap_or(SENTENCE_PATTERN);
            let boundary = Regex::new(pattern)?;
            boundary.find_iter(text).map(|m| m.end()).collect()
        }
        RevealMode::Word => WORD.find_iter(text).map(|m| m.end()).collect(),
    };
    if cuts.last() != Some(&text.len()) && !text.is_empty() {
        cuts.push(text.len());
    }
    Ok(RevealSequence {
        text: text.to_owned(),
        cuts,
        delays: config.delays.clone(),
        idx: 0,
    })
}

/// Lazy, finite sequence of increasingly-complete snapshots.
#[derive(Debug, Clone)]
pub struct RevealSequence {
    text: String,
    cuts: Vec<usize>,
    delays: Vec<Duration>,
    idx: usize,
}

impl RevealSequence {
    /// Rewind to the first step; the host restarts the sequence at will.
    pub fn restart(&mut self) {
        self.idx = 0;
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    fn delay_at(&self, idx: usize) -> Duration {
        self.delays
            .get(idx)
            .or(self.delays.last())
            .copied()
            .unwrap_or(Duration::ZERO)
    }
}

impl Iterator for RevealSequence {
    type Item = RevealStep;

    fn next(&mut self) -> Option<RevealStep> {
        let cut = *self.cuts.get(self.idx)?;
        let step = RevealStep {
            text: self.text.get(..cut)?.to_owned(),
            delay: self.delay_at(self.idx),
        };
        self.idx += 1;
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sentences_reveal_cumulatively() {
        let seq = schedule("One. Two! Three", &RevealConfig::default()).unwrap();
        let steps: Vec<String> = seq.map(|s| s.text).collect();
        assert_eq!(steps, vec!["One. ", "One. Two! ", "One. Two! Three"]);
    }

    #[test]
    fn delays_clamp_to_last_entry() {
        let config = RevealConfig {
            delays: vec![Duration::from_millis(80), Duration::from_millis(30)],
            ..RevealConfig::default()
        };
        let seq = schedule("A. B. C. D.", &config).unwrap();
        let delays: Vec<Duration> = seq.map(|s| s.delay).collect();
        assert_eq!(delays[0], Duration::from_millis(80));
        assert!(delays[1..].iter().all(|&d| d == Duration::from_millis(30)));
    }

    #[test]
    fn word_mode_splits_mixed_scripts() {
        let config = RevealConfig {
            mode: RevealMode::Word,
            ..RevealConfig::default()
        };
        let seq = schedule("hi 世界", &config).unwrap();
        let steps: Vec<String> = seq.map(|s| s.text).collect();
        assert_eq!(steps, vec!["hi ", "hi 世", "hi 世界"]);
    }

    #[test]
    fn empty_text_yields_no_steps() {
        let seq = schedule("", &RevealConfig::default()).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn restart_replays_from_the_top() {
        let mut seq = schedule("A. B.", &RevealConfig::default()).unwrap();
        let first: Vec<String> = seq.by_ref().map(|s| s.text).collect();
        seq.restart();
        let second: Vec<String> = seq.collect::<Vec<_>>().into_iter().map(|s| s.text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_custom_pattern_errors() {
        let config = RevealConfig {
            pattern: Some("[unclosed".to_owned()),
            ..RevealConfig::default()
        };
        assert!(schedule("text", &config).is_err());
    }
}
