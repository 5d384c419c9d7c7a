use crate::chain::Chain;
use crate::engine::Engine;

impl Engine {
    /// output = a * b. A power-of-two operand turns the whole product
    /// into one shift; the general path expands the shorter operand bit
    /// by bit, adding shifted copies of the longer one into a scratch
    /// accumulator. output may alias a or b.
    pub fn mul(&mut self, output: Chain, a: Chain, b: Chain) {
        if let Some(k) = self.get_single_set_bit_position(a) {
            if k == 0 {
                self.copy(output, b);
            } else {
                self.left_shift_by_amount(output, b, k);
            }
            return;
        }
        if let Some(k) = self.get_single_set_bit_position(b) {
            if k == 0 {
                self.copy(output, a);
            } else {
                self.left_shift_by_amount(output, a, k);
            }
            return;
        }

        let acc = self.mul_acc;
        let tmp = self.mul_tmp;
        self.set_to_zero(acc);
        self.set_to_zero(tmp);

        let a_length = self.significant_limbs(a);
        let b_length = self.significant_limbs(b);
        let output_length = a_length + b_length;
        self.set_length(acc, output_length);
        self.set_length(tmp, output_length);

        // Drive the bit loop with the shorter operand; the product does
        // not care which way round they go.
        let (long, short) = if a_length < b_length { (b, a) } else { (a, b) };

        let highest = self.get_highest_bit(short);
        for i in 0..=highest {
            if self.get_bit(short, i) {
                self.copy(tmp, long);
                self.left_shift_by_amount(tmp, tmp, i);
                self.add(acc, acc, tmp);
            }
        }
        self.copy(output, acc);
    }
}
