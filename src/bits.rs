use crate::chain::Chain;
use crate::engine::Engine;

impl Engine {
    /// Global index of the most significant set bit
    /// (limb index * 32 + bit offset). Returns 0 for an all-zero chain;
    /// callers that must tell zero from "bit 0 set" compare against a
    /// zero chain instead.
    pub fn get_highest_bit(&self, chain: Chain) -> u64 {
        let mut cur = Some(chain.head());
        let mut node_nr = 0u64;
        let mut highest = 0u64;
        while let Some(idx) = cur {
            let value = self.arena.value(idx);
            if value != 0 {
                highest = node_nr * 32 + (31 - value.leading_zeros()) as u64;
            }
            cur = self.arena.next(idx);
            node_nr += 1;
        }
        highest
    }

    /// `Some(k)` iff the chain's value is exactly 2^k; `None` for zero
    /// and for values with two or more set bits.
    pub fn get_single_set_bit_position(&self, chain: Chain) -> Option<u64> {
        let mut cur = Some(chain.head());
        let mut node_nr = 0u64;
        let mut position = None;
        while let Some(idx) = cur {
            let value = self.arena.value(idx);
            if value != 0 {
                if value & (value - 1) != 0 || position.is_some() {
                    return None;
                }
                position = Some(node_nr * 32 + value.trailing_zeros() as u64);
            }
            cur = self.arena.next(idx);
            node_nr += 1;
        }
        position
    }

    /// Number of limbs the value actually occupies, ignoring trailing
    /// zero capacity limbs. At least 1, even for zero. Scratch sizing
    /// goes through this rather than `get_length` so capacity never
    /// feeds back into more capacity across repeated operations.
    pub(crate) fn significant_limbs(&self, chain: Chain) -> u32 {
        (self.get_highest_bit(chain) / 32 + 1) as u32
    }

    /// Bit `bit` of the chain's value; false beyond the allocated length.
    pub fn get_bit(&self, chain: Chain, bit: u64) -> bool {
        let node_nr = bit / 32;
        let bit_nr = (bit % 32) as u32;
        let mut cur = Some(chain.head());
        for _ in 0..node_nr {
            cur = match cur {
                Some(idx) => self.arena.next(idx),
                None => return false,
            };
        }
        match cur {
            Some(idx) => (self.arena.value(idx) >> bit_nr) & 1 == 1,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Engine;

    #[test]
    fn highest_bit_within_first_limb() {
        let mut eng = Engine::new();
        let c = eng.create(0b1010_0000);
        assert_eq!(eng.get_highest_bit(c), 7);
    }

    #[test]
    fn highest_bit_spans_limbs() {
        let mut eng = Engine::new();
        let c = eng.create_from_words(&[u32::MAX, 0, 1 << 3]);
        assert_eq!(eng.get_highest_bit(c), 67);
    }

    #[test]
    fn highest_bit_ignores_trailing_zero_limbs() {
        let mut eng = Engine::new();
        let c = eng.create_from_words(&[1 << 5, 0, 0, 0]);
        assert_eq!(eng.get_highest_bit(c), 5);
    }

    #[test]
    fn highest_bit_of_zero_is_zero() {
        let mut eng = Engine::new();
        let c = eng.create_from_words(&[0, 0]);
        assert_eq!(eng.get_highest_bit(c), 0);
    }

    #[test]
    fn power_of_two_detection_across_limb_boundaries() {
        let mut eng = Engine::new();
        for k in [0u64, 31, 32, 33, 63, 64] {
            let c = eng.create(0);
            let one = eng.create(1);
            eng.left_shift_by_amount(c, one, k);
            assert_eq!(eng.get_single_set_bit_position(c), Some(k), "k = {}", k);
        }
    }

    #[test]
    fn zero_is_not_a_power_of_two() {
        let mut eng = Engine::new();
        let c = eng.create_from_words(&[0, 0, 0]);
        assert_eq!(eng.get_single_set_bit_position(c), None);
    }

    #[test]
    fn two_set_bits_are_not_a_power_of_two() {
        let mut eng = Engine::new();
        let same_limb = eng.create(0b110);
        assert_eq!(eng.get_single_set_bit_position(same_limb), None);
        let split = eng.create_from_words(&[1, 1]);
        assert_eq!(eng.get_single_set_bit_position(split), None);
    }

    #[test]
    fn get_bit_reads_globally_and_pads_with_zero() {
        let mut eng = Engine::new();
        let c = eng.create_from_words(&[0b100, 1]);
        assert!(eng.get_bit(c, 2));
        assert!(!eng.get_bit(c, 3));
        assert!(eng.get_bit(c, 32));
        assert!(!eng.get_bit(c, 33));
        assert!(!eng.get_bit(c, 4096));
    }
}
