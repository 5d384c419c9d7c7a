use crate::arena::LimbArena;
use crate::chain::Chain;

/// Owns the limb arena plus the long-lived scratch chains reused by the
/// shift, multiply and divide routines. One engine per thread of
/// computation; a `Chain` handle is only meaningful with the engine that
/// created it.
pub struct Engine {
    pub(crate) arena: LimbArena,
    pub(crate) shift_tmp: Chain,
    pub(crate) mul_acc: Chain,
    pub(crate) mul_tmp: Chain,
    pub(crate) div_rem: Chain,
    pub(crate) div_sor: Chain,
    pub(crate) div_tmp: Chain,
    pub(crate) div_quot: Chain,
    pub(crate) mod_quot: Chain,
    pub(crate) mod_prod: Chain,
    pub(crate) mod_rem: Chain,
}

impl Engine {
    pub fn new() -> Self {
        let mut arena = LimbArena::new();
        let shift_tmp = Chain(arena.alloc());
        let mul_acc = Chain(arena.alloc());
        let mul_tmp = Chain(arena.alloc());
        let div_rem = Chain(arena.alloc());
        let div_sor = Chain(arena.alloc());
        let div_tmp = Chain(arena.alloc());
        let div_quot = Chain(arena.alloc());
        let mod_quot = Chain(arena.alloc());
        let mod_prod = Chain(arena.alloc());
        let mod_rem = Chain(arena.alloc());
        log::debug!("[engine] ready, {} limbs committed", arena.limbs_committed());
        Engine {
            arena,
            shift_tmp,
            mul_acc,
            mul_tmp,
            div_rem,
            div_sor,
            div_tmp,
            div_quot,
            mod_quot,
            mod_prod,
            mod_rem,
        }
    }

    /// Limbs handed out so far, scratch included. Diagnostic only.
    pub fn limbs_used(&self) -> usize {
        self.arena.limbs_used()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
