//! Hash-chain integrity widget
//!
//! Backs the tamper demo on the admin dashboard: a chain of blocks where
//! each block hashes its content plus the previous block's hash, so
//! editing any block in place invalidates everything from that point on
//! until the chain is repaired.

use crate::content::now_iso;

/// 32-bit string hash (hash = hash * 31 + unit over UTF-16 code units,
/// wrapping), matching the widget's original in-browser behavior.
pub fn string_hash(text: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    hash
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub index: usize,
    pub timestamp: String,
    pub payload: String,
    pub prev_hash: i32,
    pub hash: i32,
}

impl Block {
    fn new(index: usize, payload: String, prev_hash: i32) -> Self {
        let timestamp = now_iso();
        let hash = Self::compute(index, &timestamp, &payload, prev_hash);
        Self {
            index,
            timestamp,
            payload,
            prev_hash,
            hash,
        }
    }

    fn compute(index: usize, timestamp: &str, payload: &str, prev_hash: i32) -> i32 {
        string_hash(&format!("{}{}{}{}", index, timestamp, payload, prev_hash))
    }

    /// Whether the stored hash still matches the block's content
    pub fn is_intact(&self) -> bool {
        self.hash == Self::compute(self.index, &self.timestamp, &self.payload, self.prev_hash)
    }

    fn rehash(&mut self) {
        self.hash = Self::compute(self.index, &self.timestamp, &self.payload, self.prev_hash);
    }
}

/// A chain rooted at a fixed genesis block
#[derive(Debug, Clone)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::new(0, "Genesis".to_string(), 0)],
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append a block carrying `payload`
    pub fn extend(&mut self, payload: impl Into<String>) -> &Block {
        let prev_hash = self.blocks.last().map(|b| b.hash).unwrap_or(0);
        let block = Block::new(self.blocks.len(), payload.into(), prev_hash);
        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1]
    }

    /// Overwrite one block's payload in place without rehashing, as the
    /// demo's tamper button does. Returns false for an unknown index.
    pub fn tamper(&mut self, index: usize, payload: impl Into<String>) -> bool {
        match self.blocks.get_mut(index) {
            Some(block) => {
                block.payload = payload.into();
                true
            }
            None => false,
        }
    }

    /// Index of the first block whose hash no longer checks out
    pub fn first_invalid(&self) -> Option<usize> {
        for (i, block) in self.blocks.iter().enumerate() {
            if !block.is_intact() {
                return Some(i);
            }
            if i > 0 && block.prev_hash != self.blocks[i - 1].hash {
                return Some(i);
            }
        }
        None
    }

    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }

    /// Recompute hashes from the first broken block onward, keeping the
    /// edited payloads
    pub fn repair(&mut self) {
        let Some(start) = self.first_invalid() else {
            return;
        };
        for i in start..self.blocks.len() {
            if i > 0 {
                self.blocks[i].prev_hash = self.blocks[i - 1].hash;
            }
            self.blocks[i].rehash();
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}
