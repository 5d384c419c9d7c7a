use crate::arena::{LimbArena, LimbIdx};
use crate::chain::Chain;
use crate::engine::Engine;

impl Engine {
    /// Appends the next 32-bit block to the chain. The write offset is
    /// implicit: each call advances 32 bits past the blocks already
    /// present, so streaming words into a freshly created chain lays
    /// them out least significant first.
    pub fn push_limb(&mut self, chain: Chain, value: u32) {
        let mut cur = chain.head();
        while let Some(next) = self.arena.next(cur) {
            cur = next;
        }
        let tail = self.arena.link_tail(cur);
        self.arena.set_value(tail, value);
    }

    /// Bulk construction from a little-endian word stream. An empty
    /// stream yields a single zero limb.
    pub fn create_from_words(&mut self, words: &[u32]) -> Chain {
        match words.split_first() {
            Some((&first, rest)) => {
                let chain = self.create(first);
                for &word in rest {
                    self.push_limb(chain, word);
                }
                chain
            }
            None => self.create(0),
        }
    }

    /// Limb count, as the boundary's read protocol reports it.
    pub fn read_length(&self, chain: Chain) -> u32 {
        self.get_length(chain)
    }

    /// Starts a word-at-a-time read of the chain's value.
    pub fn reader(&self, chain: Chain) -> LimbReader<'_> {
        LimbReader { arena: &self.arena, cur: Some(chain.head()) }
    }

    /// Individual limbs are never freed; chains live as long as their
    /// arena. Kept for boundary API parity.
    pub fn release(&mut self, _chain: Chain) {}
}

/// Cursor over a chain's limbs, least significant first. Reads past the
/// end of the chain yield zero blocks indefinitely.
pub struct LimbReader<'a> {
    arena: &'a LimbArena,
    cur: Option<LimbIdx>,
}

impl LimbReader<'_> {
    pub fn next_limb(&mut self) -> u32 {
        match self.cur {
            Some(idx) => {
                let value = self.arena.value(idx);
                self.cur = self.arena.next(idx);
                value
            }
            None => 0,
        }
    }
}
