//! The [Tiger][1] hash function and its Tiger2 variant.
//!
//! Both produce a 24-byte digest over 64-byte blocks and differ only in the
//! first padding byte: `0x01` for Tiger, `0x80` for Tiger2.
//!
//! Taking a digest does not end the stream. [`TigerHasher::sum`] works on a
//! copy of the hasher, so more data can be fed afterwards and the next digest
//! covers everything fed so far.
//!
//! ```
//! use tiger::{Tiger, Tiger2};
//!
//! let mut hasher = Tiger::new();
//! hasher.update(b"Tiger");
//! let first = hasher.sum();
//! hasher.update(b" - A Fast New Hash Function");
//! assert_ne!(first, hasher.sum());
//!
//! assert_ne!(Tiger::new().sum(), Tiger2::new().sum());
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Tiger_(hash_function)

#![no_std]
#[cfg(feature = "std")]
extern crate std;
#[macro_use] extern crate opaque_debug;
#[macro_use] extern crate digest;
extern crate block_buffer;
extern crate byte_tools;

#[cfg(feature = "std")]
use std::vec::Vec;

pub use digest::Digest;
use digest::{Input, BlockInput, FixedOutput, Reset};
use digest::generic_array::GenericArray;
use digest::generic_array::typenum::{U24, U64};

use byte_tools::write_u64_le;

use block_buffer::BlockBuffer;

#[macro_use]
mod macros;
mod consts;
mod compress;

use compress::{compress, TigerState};

type Block = GenericArray<u8, U64>;

/// A 24-byte digest.
pub type Output = GenericArray<u8, U24>;

/// Size of a digest in bytes.
pub const OUTPUT_SIZE: usize = 24;

/// Size of a compression block in bytes.
pub const BLOCK_SIZE: usize = 64;

// The length field occupies the last 8 bytes of the final block.
const LENGTH_OFFSET: u64 = 56;

/// Selects the padding terminator. Everything else is shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The original Tiger, padding starts with `0x01`.
    Tiger,
    /// Tiger2, padding starts with `0x80` as in MD5 and SHA-1.
    Tiger2,
}

impl Variant {
    pub fn padding_byte(self) -> u8 {
        match self {
            Variant::Tiger => 0x01,
            Variant::Tiger2 => 0x80,
        }
    }
}

/// Streaming Tiger engine with the variant chosen at runtime.
#[derive(Clone)]
pub struct TigerHasher {
    state: TigerState,
    buffer: BlockBuffer<U64>,
    len: u64,
    variant: Variant,
}

impl TigerHasher {
    pub fn new(variant: Variant) -> Self {
        TigerHasher {
            state: TigerState::new(),
            buffer: BlockBuffer::default(),
            len: 0,
            variant,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    pub fn output_size(&self) -> usize {
        OUTPUT_SIZE
    }

    /// Feed `input` into the hasher.
    ///
    /// A partially filled buffer is completed first, whole blocks are then
    /// compressed straight from `input`, and the tail is kept for later.
    pub fn update(&mut self, input: &[u8]) {
        self.len = self.len.wrapping_add(input.len() as u64);
        let state = &mut self.state;
        self.buffer.input(input, |blk| *state = compress(*state, blk));
    }

    /// Digest of everything fed so far.
    ///
    /// Finalization runs on a copy, so `self` can keep accepting input.
    pub fn sum(&self) -> Output {
        let mut output = Output::default();
        self.clone().finalize().write_le(&mut output);
        output
    }

    /// Append the digest of everything fed so far to `prefix`.
    #[cfg(feature = "std")]
    pub fn sum_append(&self, mut prefix: Vec<u8>) -> Vec<u8> {
        prefix.extend_from_slice(&self.sum());
        prefix
    }

    pub fn reset(&mut self) {
        self.state = TigerState::new();
        self.buffer.reset();
        self.len = 0;
    }

    fn finalize(mut self) -> TigerState {
        let len = self.len;
        let rem = len % BLOCK_SIZE as u64;
        let pad_len = if rem < LENGTH_OFFSET {
            LENGTH_OFFSET - rem
        } else {
            BLOCK_SIZE as u64 + LENGTH_OFFSET - rem
        };

        let mut padding = [0u8; BLOCK_SIZE];
        padding[0] = self.variant.padding_byte();
        self.update(&padding[..pad_len as usize]);

        let mut bit_len = [0u8; 8];
        write_u64_le(&mut bit_len, len << 3);
        self.update(&bit_len);

        assert_eq!(self.buffer.position(), 0,
                   "tiger: padding left {} bytes of a {}-byte message unprocessed",
                   self.buffer.position(), len);

        self.state
    }
}

impl BlockInput for TigerHasher {
    type BlockSize = U64;
}

impl Input for TigerHasher {
    fn input<B: AsRef<[u8]>>(&mut self, input: B) {
        self.update(input.as_ref());
    }
}

impl FixedOutput for TigerHasher {
    type OutputSize = U24;

    fn fixed_result(self) -> Output {
        let mut output = Output::default();
        self.finalize().write_le(&mut output);
        output
    }
}

impl Reset for TigerHasher {
    fn reset(&mut self) {
        TigerHasher::reset(self);
    }
}

impl_opaque_debug!(TigerHasher);
impl_write!(TigerHasher);

impl_variant!(Tiger, Variant::Tiger, "The original Tiger hash function.");
impl_variant!(Tiger2, Variant::Tiger2, "The Tiger2 hash function.");

#[cfg(test)]
mod tests {
    use super::*;

    use core::num::ParseIntError;

    fn hex_to_bytes(hex: &str) -> Result<Output, ParseIntError> {
        let mut bytes = [0; 24];
        for i in 0..hex.len()/2 {
            bytes[i] = u8::from_str_radix(&hex[2*i..2*i+2], 16)?;
        }
        Ok(bytes.into())
    }

    fn hash(variant: Variant, input: &[u8]) -> Output {
        let mut hasher = TigerHasher::new(variant);
        hasher.update(input);
        hasher.sum()
    }

    fn check(variant: Variant, test_cases: &[(&[u8], &str)]) {
        for (i, &(input, expected_hex)) in test_cases.iter().enumerate() {
            let expected = hex_to_bytes(expected_hex).unwrap();
            let reached = hash(variant, input);

            assert_eq!((i, &expected), (i, &reached));
        }
    }

    #[test]
    fn tiger_basic() {
        let test_cases: &[(&[u8], &str)] = &[
            (b"",                                                                                 "3293AC630C13F0245F92BBB1766E16167A4E58492DDE73F3"),
            (b"a",                                                                                "77BEFBEF2E7EF8AB2EC8F93BF587A7FC613E247F5F247809"),
            (b"abc",                                                                              "2AAB1484E8C158F2BFB8C5FF41B57A525129131C957B5F93"),
            (b"Tiger",                                                                            "DD00230799F5009FEC6DEBC838BB6A27DF2B9D6F110C7937"),
            (b"message digest",                                                                   "D981F8CB78201A950DCF3048751E441C517FCA1AA55A29F6"),
            (b"abcdefghijklmnopqrstuvwxyz",                                                       "1714A472EEE57D30040412BFCC55032A0B11602FF37BEEE9"),
            (b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",                         "0F7BF9A19B9C58F2B7610DF7E84F0AC3A71C631E7B53F78E"),
            (b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",                   "8DCEA680A17583EE502BA38A3C368651890FFBCCDC49A8CC"),
            (b"12345678901234567890123456789012345678901234567890123456789012345678901234567890", "1C14795529FD9F207A958F84C52F11E887FA0CABDFD91BFD"),
        ];
        check(Variant::Tiger, test_cases);
    }

    #[test]
    fn tiger2_basic() {
        let test_cases: &[(&[u8], &str)] = &[
            (b"",                                                                                 "4441BE75F6018773C206C22745374B924AA8313FEF919F41"),
            (b"a",                                                                                "67E6AE8E9E968999F70A23E72AEAA9251CBC7C78A7916636"),
            (b"abc",                                                                              "F68D7BC5AF4B43A06E048D7829560D4A9415658BB0B1F3BF"),
            (b"Tiger",                                                                            "FE40798B8EB937FD977608930548D6A894C20B04CBEF7A42"),
            (b"message digest",                                                                   "E29419A1B5FA259DE8005E7DE75078EA81A542EF2552462D"),
            (b"abcdefghijklmnopqrstuvwxyz",                                                       "F5B6B6A78C405C8547E91CD8624CB8BE83FC804A474488FD"),
            (b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",                         "A6737F3997E8FBB63D20D2DF88F86376B5FE2D5CE36646A9"),
            (b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",                   "EA9AB6228CEE7B51B77544FCA6066C8CBB5BBAE6319505CD"),
            (b"12345678901234567890123456789012345678901234567890123456789012345678901234567890", "D85278115329EBAA0EEC85ECDC5396FDA8AA3A5820942FFF"),
        ];
        check(Variant::Tiger2, test_cases);
    }

    // 55 bytes pads within the block, 56 and 63 spill into a second one, 64
    // starts a fresh block.
    #[test]
    fn padding_boundaries() {
        let zeros = [0u8; 64];
        check(Variant::Tiger, &[
            (&zeros[..55], "A4EE394B2A208E9B0A74C6D57568E470F6E658C44689FC63"),
            (&zeros[..56], "19208AEF976EEA1A1296AB46BB8519E4E35CC3D26D2B574F"),
            (&zeros[..63], "A857DD168B22B65A6DD2EA8035C4EDC4B890453D14BA6052"),
            (&zeros[..64], "33FF9966DDD692427A9BC4D611F3C74CF629A0544A1A7ED7"),
        ]);
        check(Variant::Tiger2, &[
            (&zeros[..55], "F67D481B1789E12356FB1A503BDC210E1E9AE3A6C07DE567"),
            (&zeros[..56], "CC839979E0F6A04D6EF6F9DB3FC74FACD5DE9C654F3FA2D6"),
            (&zeros[..63], "25B9983C329C8278136D6AD92D88A1EA53B11842FFEB93C6"),
            (&zeros[..64], "9AE268E25C6F98E0D8AA9859AA81681E2AA1442708670F73"),
        ]);
    }

    #[test]
    fn buffer_never_holds_full_block() {
        let data = [0x5au8; 200];
        for n in 0..data.len() {
            let mut hasher = TigerHasher::new(Variant::Tiger);
            hasher.update(&data[..n]);
            assert_eq!(hasher.buffer.position(), n % BLOCK_SIZE);
            assert_eq!(hasher.len, n as u64);
        }
    }

    #[test]
    fn sum_leaves_hasher_untouched() {
        let mut hasher = TigerHasher::new(Variant::Tiger2);
        hasher.update(b"0123456789");

        let before = (hasher.state, hasher.buffer.position(), hasher.len);
        let first = hasher.sum();
        let after = (hasher.state, hasher.buffer.position(), hasher.len);

        assert!(before == after);
        assert_eq!(first, hasher.sum());
    }

    #[test]
    fn sum_does_not_end_stream() {
        let mut hasher = TigerHasher::new(Variant::Tiger);
        hasher.update(b"Tiger");
        let first = hasher.sum();
        hasher.update(b" - A Fast New Hash Function, by Ross Anderson and Eli Biham");
        let second = hasher.sum();

        assert_eq!(first, hash(Variant::Tiger, b"Tiger"));
        assert_eq!(second, hex_to_bytes("8A866829040A410C729AD23F5ADA711603B3CDD357E4C15E").unwrap());
    }

    #[test]
    fn reset_matches_fresh() {
        for &variant in &[Variant::Tiger, Variant::Tiger2] {
            let mut hasher = TigerHasher::new(variant);
            hasher.update(&[7u8; 100]);
            let _ = hasher.sum();
            hasher.reset();

            assert_eq!(hasher.sum(), TigerHasher::new(variant).sum());
            assert_eq!(hasher.variant(), variant);
        }
    }

    #[test]
    fn fixed_result_matches_sum() {
        let mut hasher = TigerHasher::new(Variant::Tiger2);
        Input::input(&mut hasher, b"abc");
        let sum = hasher.sum();
        assert_eq!(hasher.fixed_result(), sum);

        let mut hasher = Tiger::new();
        hasher.update(b"abc");
        let sum = hasher.sum();
        assert_eq!(FixedOutput::fixed_result(hasher), sum);
    }

    #[test]
    fn byte_counter_wraps() {
        let mut hasher = TigerHasher::new(Variant::Tiger);
        hasher.len = u64::max_value() - 1;
        hasher.update(b"abc");
        assert_eq!(hasher.len, 1);
        assert_eq!(hasher.buffer.position(), 3);
    }

    #[test]
    fn sizes() {
        let hasher = TigerHasher::new(Variant::Tiger);
        assert_eq!(hasher.block_size(), 64);
        assert_eq!(hasher.output_size(), 24);
        assert_eq!(Variant::Tiger.padding_byte(), 0x01);
        assert_eq!(Variant::Tiger2.padding_byte(), 0x80);
        assert_eq!(Tiger::new().variant(), Variant::Tiger);
        assert_eq!(Tiger2::new().variant(), Variant::Tiger2);
    }

    #[cfg(feature = "std")]
    #[test]
    fn sum_append_keeps_prefix() {
        let hasher = Tiger::new();
        let out = hasher.sum_append(Vec::from(&b"prefix:"[..]));
        assert_eq!(&out[..7], b"prefix:");
        assert_eq!(&out[7..], &hasher.sum()[..]);
    }
}
