//! Pinned regression scenarios, scaled down to test-suite runtimes. The
//! full-magnitude originals are the host benchmark sequences; they keep
//! their pinned oracles here behind `#[ignore]`. All oracle constants
//! were computed once with a trusted arbitrary-precision reference.

use limbchain::Engine;

fn low_word(eng: &Engine, c: limbchain::Chain) -> u32 {
    eng.reader(c).next_limb()
}

#[test]
fn repeated_addition_scaled() {
    // 17 + 17 * 1_000_000, well inside one limb
    let mut eng = Engine::new();
    let acc = eng.create(17);
    let seventeen = eng.create(17);
    for _ in 0..1_000_000 {
        eng.add(acc, acc, seventeen);
    }
    assert_eq!(low_word(&eng, acc), 17_000_017);
    assert_eq!(eng.get_length(acc), 1);
}

#[test]
#[ignore = "benchmark scale: 100 million additions"]
fn repeated_addition_full() {
    let mut eng = Engine::new();
    let acc = eng.create(17);
    let seventeen = eng.create(17);
    for _ in 0..100_000_000 {
        eng.add(acc, acc, seventeen);
    }
    // (17 + 17 * 100_000_000) mod 2^32
    assert_eq!(low_word(&eng, acc), 1_700_000_017);
}

#[test]
fn shift_then_divide_scaled() {
    // 13 << 1000, divided by 17 fifty times, low word pinned
    let mut eng = Engine::new();
    let x = eng.create(13);
    let seventeen = eng.create(17);
    eng.left_shift_by_amount(x, x, 1000);
    for _ in 0..50 {
        eng.big_div(x, x, seventeen);
    }
    assert_eq!(low_word(&eng, x), 1_899_014_706);
    assert_eq!(eng.get_highest_bit(x), 799);
}

#[test]
#[ignore = "benchmark scale: 500k-bit operand, 100k divisions"]
fn shift_then_divide_full() {
    let mut eng = Engine::new();
    let x = eng.create(13);
    let seventeen = eng.create(17);
    eng.left_shift_by_amount(x, x, 500_000);
    for _ in 0..100_000 {
        eng.big_div(x, x, seventeen);
    }
    assert_eq!(low_word(&eng, x), 2_934_616_365);
}

#[test]
fn shift_ping_pong_scaled() {
    // 1000 left shifts by 8, 999 right shifts by 8: one net shift stays
    let mut eng = Engine::new();
    let x = eng.create(42);
    for _ in 0..1000 {
        eng.left_shift_by_amount(x, x, 8);
    }
    for _ in 0..999 {
        eng.right_shift_by_amount(x, x, 8);
    }
    let expected = eng.create(42 << 8);
    assert!(eng.is_equal(x, expected));
}

#[test]
#[ignore = "benchmark scale: 50k shift round trips"]
fn shift_ping_pong_full() {
    let mut eng = Engine::new();
    let x = eng.create(42);
    for _ in 0..50_000 {
        eng.left_shift_by_amount(x, x, 8);
    }
    for _ in 0..49_999 {
        eng.right_shift_by_amount(x, x, 8);
    }
    let expected = eng.create(42 << 8);
    assert!(eng.is_equal(x, expected));
}

#[test]
fn scratch_chains_keep_allocation_flat() {
    // Repeated arithmetic reuses the long-lived scratch chains; the
    // arena should stop growing once every operand reaches its final
    // width.
    let mut eng = Engine::new();
    let a = eng.create_from_words(&[0x1234_5678, 0x9abc_def0]);
    let b = eng.create_from_words(&[0x0f0f_0f0f, 0x3]);
    let r = eng.create(0);
    for _ in 0..10 {
        eng.mul(r, a, b);
        eng.big_div(r, r, b);
        eng.modulo(r, a, b);
    }
    let settled = eng.limbs_used();
    for _ in 0..100 {
        eng.mul(r, a, b);
        eng.big_div(r, r, b);
        eng.modulo(r, a, b);
    }
    assert_eq!(eng.limbs_used(), settled);
}
