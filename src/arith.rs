use crate::chain::Chain;
use crate::engine::Engine;

impl Engine {
    /// dest = x + y. Ripple carry, least significant limb first; dest
    /// grows as needed and may end one limb longer than both inputs.
    /// dest may alias x or y for in-place accumulation.
    pub fn add(&mut self, dest: Chain, x: Chain, y: Chain) {
        if dest != x && dest != y {
            self.set_to_zero(dest);
        }
        let mut x_cur = Some(x.head());
        let mut y_cur = Some(y.head());
        let mut d = dest.head();
        let mut carry = 0u32;
        while x_cur.is_some() || y_cur.is_some() || carry != 0 {
            let x_value = x_cur.map_or(0, |i| self.arena.value(i));
            let y_value = y_cur.map_or(0, |i| self.arena.value(i));
            let sum = x_value.wrapping_add(y_value).wrapping_add(carry);

            // Wrap-around leaves the sum below x's limb; wrap-to-equal is
            // only possible when the added value was nonzero.
            carry = if sum < x_value || (sum == x_value && y_value > 0) {
                1
            } else {
                0
            };

            self.arena.set_value(d, sum);

            x_cur = x_cur.and_then(|i| self.arena.next(i));
            y_cur = y_cur.and_then(|i| self.arena.next(i));

            if x_cur.is_some() || y_cur.is_some() || carry != 0 {
                d = match self.arena.next(d) {
                    Some(next) => next,
                    None => self.arena.link_tail(d),
                };
            }
        }
    }

    /// dest = x - y, saturating at zero: if y's magnitude exceeds x's the
    /// result is zero, never a wraparound. dest may alias x or y.
    pub fn sub(&mut self, dest: Chain, x: Chain, y: Chain) {
        if self.is_gt(y, x) {
            self.set_to_zero(dest);
            return;
        }
        if dest != x && dest != y {
            self.set_to_zero(dest);
        }
        let mut x_cur = Some(x.head());
        let mut y_cur = Some(y.head());
        let mut d = dest.head();
        let mut borrow = false;
        while x_cur.is_some() || y_cur.is_some() {
            let mut x_value = x_cur.map_or(0, |i| self.arena.value(i));
            let y_value = y_cur.map_or(0, |i| self.arena.value(i));

            if borrow {
                if x_value > 0 {
                    x_value -= 1;
                    borrow = false;
                } else {
                    // Limb was zero: it becomes the maximal value and the
                    // borrow moves up another limb.
                    x_value = u32::MAX;
                }
            }

            let diff = if x_value < y_value {
                borrow = true;
                // (2^32 + x_value) - y_value
                x_value.wrapping_sub(y_value)
            } else {
                x_value - y_value
            };

            self.arena.set_value(d, diff);

            x_cur = x_cur.and_then(|i| self.arena.next(i));
            y_cur = y_cur.and_then(|i| self.arena.next(i));

            if x_cur.is_some() || y_cur.is_some() {
                d = match self.arena.next(d) {
                    Some(next) => next,
                    None => self.arena.link_tail(d),
                };
            }
        }
    }
}
