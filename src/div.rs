use crate::chain::Chain;
use crate::engine::Engine;

impl Engine {
    /// output = a / b (integer quotient). Division by zero is a defined
    /// zero result, not an error. Power-of-two divisors reduce to a
    /// right shift; the general path is restoring binary long division.
    /// output may alias a or b.
    pub fn big_div(&mut self, output: Chain, a: Chain, b: Chain) {
        let rem = self.div_rem;
        let sor = self.div_sor;
        let tmp = self.div_tmp;
        let quot = self.div_quot;
        self.set_to_zero(rem);
        self.set_to_zero(sor);
        self.set_to_zero(tmp);
        self.set_to_zero(quot);

        if self.is_zero(b) {
            self.set_to_zero(output);
            return;
        }

        if let Some(k) = self.get_single_set_bit_position(b) {
            if k == 0 {
                self.copy(output, a);
            } else {
                self.right_shift_by_amount(output, a, k);
            }
            return;
        }

        if self.is_gt(b, a) {
            self.set_to_zero(output);
            return;
        }

        if self.is_equal(a, b) {
            self.set_to_zero(output);
            self.arena.set_value(output.head(), 1);
            return;
        }

        let a_length = self.significant_limbs(a);
        self.set_length(rem, a_length);
        self.set_length(quot, a_length);
        self.copy(rem, a);

        let a_highest = self.get_highest_bit(a);
        let b_highest = self.get_highest_bit(b);

        // One quotient bit per candidate shift, highest first. After
        // processing shift s the remainder is below b * 2^s.
        for shift in (0..=(a_highest - b_highest)).rev() {
            self.copy(sor, b);
            self.left_shift_by_amount(sor, sor, shift);

            if !self.is_gt(sor, rem) {
                self.sub(rem, rem, sor);
                self.set_to_zero(tmp);
                self.arena.set_value(tmp.head(), 1);
                self.left_shift_by_amount(tmp, tmp, shift);
                self.add(quot, quot, tmp);
            }
        }

        self.copy(output, quot);
    }

    /// output = a mod b. Zero divisor gives zero. A power-of-two divisor
    /// 2^k masks a down to its low k bits; the general path computes
    /// a - (a/b)*b. output may alias a or b.
    pub fn modulo(&mut self, output: Chain, a: Chain, b: Chain) {
        let quot = self.mod_quot;
        let prod = self.mod_prod;
        let rem = self.mod_rem;
        self.set_to_zero(quot);
        self.set_to_zero(prod);
        self.set_to_zero(rem);

        if self.is_zero(b) {
            self.set_to_zero(output);
            return;
        }

        if let Some(k) = self.get_single_set_bit_position(b) {
            if k == 0 {
                self.set_to_zero(output);
                return;
            }

            self.copy(output, a);

            let cutoff_node_nr = k / 32;
            let cutoff_bit_nr = (k % 32) as u32;
            let mut cur = Some(output.head());
            let mut node_nr = 0u64;
            while let Some(idx) = cur {
                if node_nr > cutoff_node_nr {
                    self.arena.set_value(idx, 0);
                } else if node_nr == cutoff_node_nr {
                    if cutoff_bit_nr == 0 {
                        self.arena.set_value(idx, 0);
                    } else {
                        let mask = (1u32 << cutoff_bit_nr) - 1;
                        let value = self.arena.value(idx) & mask;
                        self.arena.set_value(idx, value);
                    }
                }
                cur = self.arena.next(idx);
                node_nr += 1;
            }
            return;
        }

        self.big_div(quot, a, b);
        self.mul(prod, quot, b);
        self.sub(rem, a, prod);
        self.copy(output, rem);
    }
}
