use alloc::boxed::Box;
use alloc::vec::Vec;

pub(crate) type LimbIdx = u32;

const NIL: LimbIdx = LimbIdx::MAX;

/// One committed region of limb storage. Matches the linear-memory page
/// granularity of the production host.
pub(crate) const PAGE_SIZE: usize = 64 * 1024;

pub(crate) const LIMBS_PER_PAGE: usize = PAGE_SIZE / core::mem::size_of::<LimbNode>();

#[derive(Clone, Copy)]
pub(crate) struct LimbNode {
    value: u32,
    next: LimbIdx,
}

const EMPTY_NODE: LimbNode = LimbNode { value: 0, next: NIL };

/// Bump allocator for limb nodes. Pages are committed one at a time and
/// never released; nodes are addressed by index so pages never move.
pub(crate) struct LimbArena {
    pages: Vec<Box<[LimbNode; LIMBS_PER_PAGE]>>,
    cursor: usize,
}

impl LimbArena {
    pub fn new() -> Self {
        LimbArena { pages: Vec::new(), cursor: 0 }
    }

    /// Hands out a fresh zero-valued, unlinked limb. Never fails: if the
    /// backing store cannot grow the process is done for.
    pub fn alloc(&mut self) -> LimbIdx {
        if self.cursor == self.pages.len() * LIMBS_PER_PAGE {
            self.commit_page();
        }
        let idx = self.cursor;
        self.cursor += 1;
        idx as LimbIdx
    }

    fn commit_page(&mut self) {
        if self.cursor >= NIL as usize {
            panic!("[arena] limb index space exhausted");
        }
        self.pages.push(Box::new([EMPTY_NODE; LIMBS_PER_PAGE]));
        log::debug!(
            "[arena] committed page {} ({} limbs total)",
            self.pages.len(),
            self.pages.len() * LIMBS_PER_PAGE
        );
    }

    fn node(&self, idx: LimbIdx) -> &LimbNode {
        &self.pages[idx as usize / LIMBS_PER_PAGE][idx as usize % LIMBS_PER_PAGE]
    }

    fn node_mut(&mut self, idx: LimbIdx) -> &mut LimbNode {
        &mut self.pages[idx as usize / LIMBS_PER_PAGE][idx as usize % LIMBS_PER_PAGE]
    }

    pub fn value(&self, idx: LimbIdx) -> u32 {
        self.node(idx).value
    }

    pub fn set_value(&mut self, idx: LimbIdx, value: u32) {
        self.node_mut(idx).value = value;
    }

    pub fn next(&self, idx: LimbIdx) -> Option<LimbIdx> {
        let next = self.node(idx).next;
        if next == NIL {
            None
        } else {
            Some(next)
        }
    }

    /// Allocates a fresh limb and links it after `idx`.
    pub fn link_tail(&mut self, idx: LimbIdx) -> LimbIdx {
        let tail = self.alloc();
        self.node_mut(idx).next = tail;
        tail
    }

    pub fn limbs_committed(&self) -> usize {
        self.pages.len() * LIMBS_PER_PAGE
    }

    pub fn limbs_used(&self) -> usize {
        self.cursor
    }
}
