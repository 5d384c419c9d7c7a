//! Flat, single-engine surface for hosts that bind the boundary as free
//! functions. One process-wide engine behind a spin mutex, plus the
//! implicit read cursor of the word-at-a-time pull protocol. Meant for
//! single-threaded hosts; multi-threaded embedders should own their own
//! [`Engine`](crate::Engine) per thread instead.

use crate::arena::LimbIdx;
use crate::chain::Chain;
use crate::engine::Engine;
use lazy_static::lazy_static;
use spin::Mutex;

lazy_static! {
    static ref ENGINE: Mutex<Engine> = Mutex::new(Engine::new());
    static ref READ_CURSOR: Mutex<Option<LimbIdx>> = Mutex::new(None);
}

pub fn create(initial: u32) -> Chain {
    ENGINE.lock().create(initial)
}

pub fn push_limb(chain: Chain, value: u32) {
    ENGINE.lock().push_limb(chain, value)
}

/// Reports the chain's limb count and resets the read cursor to its
/// first limb; subsequent [`next_limb`] calls stream the value out.
pub fn read_length(chain: Chain) -> u32 {
    let engine = ENGINE.lock();
    *READ_CURSOR.lock() = Some(chain.head());
    engine.read_length(chain)
}

/// Next 32-bit block at the cursor; zero once the chain is exhausted or
/// before any read was started.
pub fn next_limb() -> u32 {
    let engine = ENGINE.lock();
    let mut cursor = READ_CURSOR.lock();
    match *cursor {
        Some(idx) => {
            let value = engine.arena.value(idx);
            *cursor = engine.arena.next(idx);
            value
        }
        None => 0,
    }
}

pub fn is_gt(a: Chain, b: Chain) -> bool {
    ENGINE.lock().is_gt(a, b)
}

pub fn is_equal(a: Chain, b: Chain) -> bool {
    ENGINE.lock().is_equal(a, b)
}

pub fn copy(dest: Chain, src: Chain) {
    ENGINE.lock().copy(dest, src)
}

pub fn set_to_zero(chain: Chain) {
    ENGINE.lock().set_to_zero(chain)
}

pub fn add(dest: Chain, x: Chain, y: Chain) {
    ENGINE.lock().add(dest, x, y)
}

pub fn sub(dest: Chain, x: Chain, y: Chain) {
    ENGINE.lock().sub(dest, x, y)
}

pub fn mul(output: Chain, a: Chain, b: Chain) {
    ENGINE.lock().mul(output, a, b)
}

pub fn big_div(output: Chain, a: Chain, b: Chain) {
    ENGINE.lock().big_div(output, a, b)
}

pub fn modulo(output: Chain, a: Chain, b: Chain) {
    ENGINE.lock().modulo(output, a, b)
}

pub fn left_shift(output: Chain, input: Chain, shift: Chain) {
    ENGINE.lock().left_shift(output, input, shift)
}

pub fn right_shift(output: Chain, input: Chain, shift: Chain) {
    ENGINE.lock().right_shift(output, input, shift)
}

pub fn release(chain: Chain) {
    ENGINE.lock().release(chain)
}
