//! Time-windowed input history for one player

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::config::CombatConfig;
use crate::core::types::Millis;
use crate::input::token::InputToken;

/// One buffered token and when it arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEntry {
    pub token: InputToken,
    pub timestamp_ms: Millis,
}

/// Rolling, bounded history of a single player's input tokens
///
/// Entries older than `window_ms` (relative to the newest insertion) are
/// dropped before each append, and the oldest entry is evicted once the
/// buffer is over `max_length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBuffer {
    entries: VecDeque<InputEntry>,
    max_length: usize,
    window_ms: Millis,
}

impl InputBuffer {
    pub fn new(max_length: usize, window_ms: Millis) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_length + 1),
            max_length,
            window_ms,
        }
    }

    pub fn from_config(config: &CombatConfig) -> Self {
        Self::new(config.input_buffer_capacity, config.input_window_ms)
    }

    /// Append a token, returning the updated buffer
    pub fn add_input(mut self, token: InputToken, now_ms: Millis) -> Self {
        self.record(token, now_ms);
        self
    }

    /// In-place form of `add_input`
    pub fn record(&mut self, token: InputToken, now_ms: Millis) {
        self.prune(now_ms);
        self.entries.push_back(InputEntry {
            token,
            timestamp_ms: now_ms,
        });
        while self.entries.len() > self.max_length {
            self.entries.pop_front();
        }
        tracing::trace!(%token, now_ms, len = self.entries.len(), "buffered input");
    }

    /// Drop every entry older than the window
    pub fn prune(&mut self, now_ms: Millis) {
        let cutoff = now_ms.saturating_sub(self.window_ms);
        while let Some(front) = self.entries.front() {
            if front.timestamp_ms < cutoff {
                self.entries.pop_front();
            } else {
                break;
            }
        }
    }

    /// Buffered tokens, oldest first
    pub fn sequence(&self) -> Vec<InputToken> {
        self.entries.iter().map(|e| e.token).collect()
    }

    /// Buffered timestamps, parallel to `sequence()`
    pub fn timestamps(&self) -> Vec<Millis> {
        self.entries.iter().map(|e| e.timestamp_ms).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &InputEntry> {
        self.entries.iter()
    }

    /// Most recent token, if any
    pub fn latest(&self) -> Option<InputToken> {
        self.entries.back().map(|e| e.token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn window_ms(&self) -> Millis {
        self.window_ms
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::from_config(&CombatConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_in_order() {
        let buffer = InputBuffer::new(10, 500)
            .add_input(InputToken::Down, 0)
            .add_input(InputToken::DownRight, 16)
            .add_input(InputToken::Right, 33);

        assert_eq!(
            buffer.sequence(),
            vec![InputToken::Down, InputToken::DownRight, InputToken::Right]
        );
        assert_eq!(buffer.timestamps(), vec![0, 16, 33]);
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut buffer = InputBuffer::new(3, 10_000);
        for (i, token) in [InputToken::Up, InputToken::Down, InputToken::Left, InputToken::Right]
            .into_iter()
            .enumerate()
        {
            buffer.record(token, i as u64);
        }

        assert_eq!(buffer.len(), 3);
        assert_eq!(
            buffer.sequence(),
            vec![InputToken::Down, InputToken::Left, InputToken::Right]
        );
    }

    #[test]
    fn test_stale_entries_pruned() {
        let buffer = InputBuffer::new(10, 300)
            .add_input(InputToken::Down, 0)
            .add_input(InputToken::DownRight, 100)
            .add_input(InputToken::Right, 350);

        // Entry at 0 is 350ms old, entry at 100 is exactly 250ms old
        assert_eq!(buffer.sequence(), vec![InputToken::DownRight, InputToken::Right]);
    }

    #[test]
    fn test_entry_exactly_at_window_edge_kept() {
        let buffer = InputBuffer::new(10, 300)
            .add_input(InputToken::Down, 0)
            .add_input(InputToken::Punch, 300);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_add_input_leaves_original_untouched() {
        let original = InputBuffer::new(10, 500).add_input(InputToken::Down, 0);
        let updated = original.clone().add_input(InputToken::Punch, 10);

        assert_eq!(original.len(), 1);
        assert_eq!(updated.len(), 2);
        assert_eq!(updated.latest(), Some(InputToken::Punch));
    }

    #[test]
    fn test_clear() {
        let mut buffer = InputBuffer::default().add_input(InputToken::Kick, 5);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.max_length(), 10);
    }
}
