use crate::models::{Block, Citation, Message};
use std::collections::HashMap;

/// Sequential citation numbers per unique source
///
/// Numbers are 1-based and contiguous, assigned in first-seen order over the
/// message's text blocks. The index lives for a single render call.
#[derive(Debug, Clone, Default)]
pub struct CitationIndex {
    numbers: HashMap<String, usize>,
    /// Source keys in number order
    order: Vec<String>,
}

impl CitationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan all top-level text blocks of a message
    pub fn build(message: &Message) -> Self {
        let mut index = Self::new();
        for block in &message.blocks {
            if let Block::Text { citations, .. } = block {
                for citation in citations {
                    index.insert(citation);
                }
            }
        }
        tracing::debug!(sources = index.len(), "Built citation index");
        index
    }

    /// Register a citation, returning its number
    ///
    /// Citations without a source key are not numbered.
    pub fn insert(&mut self, citation: &Citation) -> Option<usize> {
        let key = citation.source_key()?;
        if let Some(&number) = self.numbers.get(&key) {
            return Some(number);
        }
        let number = self.order.len() + 1;
        self.order.push(key.clone());
        self.numbers.insert(key, number);
        Some(number)
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.numbers.get(key).copied()
    }

    pub fn number_for(&self, citation: &Citation) -> Option<usize> {
        citation.source_key().and_then(|key| self.get(&key))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// (number, source key) pairs in number order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.order
            .iter()
            .enumerate()
            .map(|(i, key)| (i + 1, key.as_str()))
    }
}
