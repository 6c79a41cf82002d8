use core::num::Wrapping;

use byte_tools::{read_u64v_le, write_u64v_le};

use consts::*;
use Block;

/// The three chaining words `(a, b, c)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TigerState(pub u64, pub u64, pub u64);

impl TigerState {
    pub fn new() -> Self {
        TigerState(A, B, C)
    }

    /// Serialize as `a || b || c`, each word little-endian.
    pub fn write_le(&self, out: &mut [u8]) {
        write_u64v_le(out, &[self.0, self.1, self.2]);
    }
}

#[inline(always)]
fn byte(x: u64, n: u32) -> usize {
    ((x >> (8 * n)) & 0xff) as usize
}

#[inline(always)]
fn even_lookup(c: u64) -> u64 {
    T1[byte(c, 0)] ^ T2[byte(c, 2)] ^ T3[byte(c, 4)] ^ T4[byte(c, 6)]
}

#[inline(always)]
fn odd_lookup(c: u64) -> u64 {
    T4[byte(c, 1)] ^ T3[byte(c, 3)] ^ T2[byte(c, 5)] ^ T1[byte(c, 7)]
}

/// Advance `state` by one 64-byte block.
pub fn compress(state: TigerState, block: &Block) -> TigerState {
    let mut words = [0u64; 8];
    read_u64v_le(&mut words, block);

    let mut x = [Wrapping(0u64); 8];
    for (dst, &src) in x.iter_mut().zip(words.iter()) {
        *dst = Wrapping(src);
    }

    let TigerState(a0, b0, c0) = state;
    let (mut a, mut b, mut c) = (Wrapping(a0), Wrapping(b0), Wrapping(c0));

    pass!(a, b, c, x, 5);
    key_schedule!(x);
    pass!(c, a, b, x, 7);
    key_schedule!(x);
    pass!(b, c, a, x, 9);

    a ^= Wrapping(a0);
    b -= Wrapping(b0);
    c += Wrapping(c0);

    TigerState(a.0, b.0, c.0)
}
