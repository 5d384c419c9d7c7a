use crate::arena::LimbIdx;
use crate::engine::Engine;

/// Opaque handle to the least-significant limb of one big integer.
/// The value is `sum(limb[i] * 2^(32*i))` over all reachable limbs;
/// trailing zero limbs are legal and often retained as capacity, so the
/// physical limb count is a capacity hint, never the value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Chain(pub(crate) LimbIdx);

impl Chain {
    pub(crate) fn head(self) -> LimbIdx {
        self.0
    }
}

impl Engine {
    /// New chain holding a single limb with the given value.
    pub fn create(&mut self, initial: u32) -> Chain {
        let head = self.arena.alloc();
        self.arena.set_value(head, initial);
        Chain(head)
    }

    /// Number of allocated limbs, counted by traversal.
    pub fn get_length(&self, chain: Chain) -> u32 {
        let mut length = 0;
        let mut cur = Some(chain.head());
        while let Some(idx) = cur {
            length += 1;
            cur = self.arena.next(idx);
        }
        length
    }

    /// Extends `chain` with zero limbs until it holds at least `length`
    /// of them. Never shrinks.
    pub fn set_length(&mut self, chain: Chain, length: u32) {
        let mut cur = chain.head();
        let mut count = 1;
        while count < length {
            cur = match self.arena.next(cur) {
                Some(next) => next,
                None => self.arena.link_tail(cur),
            };
            count += 1;
        }
    }

    /// Zeroes every reachable limb without changing the chain's length.
    pub fn set_to_zero(&mut self, chain: Chain) {
        let mut cur = Some(chain.head());
        while let Some(idx) = cur {
            self.arena.set_value(idx, 0);
            cur = self.arena.next(idx);
        }
    }

    pub(crate) fn is_zero(&self, chain: Chain) -> bool {
        let mut cur = Some(chain.head());
        while let Some(idx) = cur {
            if self.arena.value(idx) != 0 {
                return false;
            }
            cur = self.arena.next(idx);
        }
        true
    }

    /// Copies `src`'s limb values into `dest`, allocating further dest
    /// limbs only as needed; dest never shrinks. Self-copy is a no-op.
    pub fn copy(&mut self, dest: Chain, src: Chain) {
        if dest == src {
            return;
        }
        self.set_to_zero(dest);
        let mut d = dest.head();
        let mut s = Some(src.head());
        while let Some(si) = s {
            let value = self.arena.value(si);
            self.arena.set_value(d, value);
            s = self.arena.next(si);
            if s.is_some() {
                d = match self.arena.next(d) {
                    Some(next) => next,
                    None => self.arena.link_tail(d),
                };
            }
        }
    }

    /// Value equality over the longer of the two lengths; missing limbs
    /// read as zero.
    pub fn is_equal(&self, a: Chain, b: Chain) -> bool {
        let mut a_cur = Some(a.head());
        let mut b_cur = Some(b.head());
        while a_cur.is_some() || b_cur.is_some() {
            let a_value = a_cur.map_or(0, |i| self.arena.value(i));
            let b_value = b_cur.map_or(0, |i| self.arena.value(i));
            if a_value != b_value {
                return false;
            }
            a_cur = a_cur.and_then(|i| self.arena.next(i));
            b_cur = b_cur.and_then(|i| self.arena.next(i));
        }
        true
    }

    /// Magnitude comparison, walking low to high. At every differing
    /// position the flag is overwritten, so the last write wins and the
    /// result is decided by the most significant differing limb. Equal
    /// limbs never touch the flag.
    pub fn is_gt(&self, a: Chain, b: Chain) -> bool {
        let mut a_cur = Some(a.head());
        let mut b_cur = Some(b.head());
        let mut gt = false;
        while a_cur.is_some() || b_cur.is_some() {
            let a_value = a_cur.map_or(0, |i| self.arena.value(i));
            let b_value = b_cur.map_or(0, |i| self.arena.value(i));
            if a_value > b_value {
                gt = true;
            } else if a_value < b_value {
                gt = false;
            }
            a_cur = a_cur.and_then(|i| self.arena.next(i));
            b_cur = b_cur.and_then(|i| self.arena.next(i));
        }
        gt
    }
}
