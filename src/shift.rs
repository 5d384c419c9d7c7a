use crate::chain::Chain;
use crate::engine::Engine;

/// Shift chains carry their amount in the low two limbs; a requested
/// amount whose own highest bit index is above this ceiling cannot be a
/// meaningful bit count and the shift result is defined as zero.
const SHIFT_BIT_CEILING: u64 = 34;

impl Engine {
    /// output = input << amount. output may alias input: bits land in a
    /// long-lived scratch chain first and are copied out at the end, so
    /// source bits are never overwritten before they are read.
    pub fn left_shift_by_amount(&mut self, output: Chain, input: Chain, amount: u64) {
        let tmp = self.shift_tmp;
        self.set_to_zero(tmp);

        let write_node_nr = amount / 32;
        let mut write_bit_nr = (amount % 32) as u32;

        let mut w = tmp.head();
        for _ in 0..write_node_nr {
            w = match self.arena.next(w) {
                Some(next) => next,
                None => self.arena.link_tail(w),
            };
        }

        // Only bits up to the input's highest set bit matter. Trailing
        // zero limbs are capacity, and walking them would grow the
        // scratch chain by amount/32 limbs on every in-place shift.
        let mut remaining = self.get_highest_bit(input) + 1;
        let mut read = Some(input.head());
        let mut read_bit_nr = 0u32;
        while remaining > 0 {
            let r = match read {
                Some(r) => r,
                None => break,
            };
            let bit = (self.arena.value(r) >> read_bit_nr) & 1;
            let value = self.arena.value(w) | (bit << write_bit_nr);
            self.arena.set_value(w, value);

            remaining -= 1;
            read_bit_nr += 1;
            write_bit_nr += 1;

            if read_bit_nr == 32 {
                read_bit_nr = 0;
                read = self.arena.next(r);
            }
            if write_bit_nr == 32 {
                write_bit_nr = 0;
                w = match self.arena.next(w) {
                    Some(next) => next,
                    None => self.arena.link_tail(w),
                };
            }
        }

        self.copy(output, tmp);
    }

    /// output = input << shift, the amount taken from the low two limbs
    /// of `shift` combined into 64 bits. Amounts needing a third limb are
    /// out of the representable range and not supported.
    pub fn left_shift(&mut self, output: Chain, input: Chain, shift: Chain) {
        let amount = self.shift_amount(shift);
        self.left_shift_by_amount(output, input, amount);
    }

    /// output = input >> amount. Zero when the amount exceeds input's
    /// highest bit. Writes output directly: the write cursor never passes
    /// the read cursor, so output may alias input.
    pub fn right_shift_by_amount(&mut self, output: Chain, input: Chain, amount: u64) {
        if self.get_highest_bit(input) < amount {
            self.set_to_zero(output);
            return;
        }

        let mut read_bit_nr = (amount % 32) as u32;
        let read_node_nr = amount / 32;
        let mut write_bit_nr = 0u32;

        let mut read = Some(input.head());
        for _ in 0..read_node_nr {
            read = read.and_then(|i| self.arena.next(i));
        }
        let mut write = Some(output.head());

        while let Some(r) = read {
            let bit = (self.arena.value(r) >> read_bit_nr) & 1;
            if let Some(w) = write {
                let value = (self.arena.value(w) & !(1 << write_bit_nr)) | (bit << write_bit_nr);
                self.arena.set_value(w, value);
            }

            read_bit_nr += 1;
            write_bit_nr += 1;

            if read_bit_nr == 32 {
                read_bit_nr = 0;
                read = self.arena.next(r);
            }
            if write_bit_nr == 32 {
                write_bit_nr = 0;
                if let Some(w) = write {
                    if self.arena.next(w).is_none() && read.is_some() {
                        self.arena.link_tail(w);
                    }
                    write = self.arena.next(w);
                }
            }
        }

        // Everything above the last written bit is stale: mask the final
        // partial limb and zero the rest.
        if let Some(w) = write {
            let value = self.arena.value(w) & ((1u32 << write_bit_nr) - 1);
            self.arena.set_value(w, value);
            write = self.arena.next(w);
        }
        while let Some(w) = write {
            self.arena.set_value(w, 0);
            write = self.arena.next(w);
        }
    }

    /// output = input >> shift, amount from the low two limbs of `shift`.
    /// Amounts beyond the sanity ceiling yield zero.
    pub fn right_shift(&mut self, output: Chain, input: Chain, shift: Chain) {
        if self.get_highest_bit(shift) > SHIFT_BIT_CEILING {
            self.set_to_zero(output);
            return;
        }
        let amount = self.shift_amount(shift);
        self.right_shift_by_amount(output, input, amount);
    }

    fn shift_amount(&self, shift: Chain) -> u64 {
        let low = self.arena.value(shift.head());
        let high = self
            .arena
            .next(shift.head())
            .map_or(0, |i| self.arena.value(i));
        ((high as u64) << 32) | low as u64
    }
}
