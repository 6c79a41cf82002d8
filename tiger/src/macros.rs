// All arithmetic below is on `Wrapping<u64>`; overflow is part of the
// algorithm.

/// One round: mix key word `$x` into `$c`, then feed S-box lookups on the
/// bytes of `$c` into `$a` and `$b`.
macro_rules! round {
    ($a:ident, $b:ident, $c:ident, $x:expr, $mul:expr) => {
        $c ^= $x;
        $a -= Wrapping(even_lookup($c.0));
        $b += Wrapping(odd_lookup($c.0));
        $b *= Wrapping($mul);
    };
}

/// Eight rounds over the key words, rotating the roles of the state words.
macro_rules! pass {
    ($a:ident, $b:ident, $c:ident, $x:ident, $mul:expr) => {
        round!($a, $b, $c, $x[0], $mul);
        round!($b, $c, $a, $x[1], $mul);
        round!($c, $a, $b, $x[2], $mul);
        round!($a, $b, $c, $x[3], $mul);
        round!($b, $c, $a, $x[4], $mul);
        round!($c, $a, $b, $x[5], $mul);
        round!($a, $b, $c, $x[6], $mul);
        round!($b, $c, $a, $x[7], $mul);
    };
}

macro_rules! key_schedule {
    ($x:ident) => {
        $x[0] -= $x[7] ^ Wrapping(KS_HEAD);
        $x[1] ^= $x[0];
        $x[2] += $x[1];
        $x[3] -= $x[2] ^ ((!$x[1]) << 19);
        $x[4] ^= $x[3];
        $x[5] += $x[4];
        $x[6] -= $x[5] ^ ((!$x[4]) >> 23);
        $x[7] ^= $x[6];
        $x[0] += $x[7];
        $x[1] -= $x[0] ^ ((!$x[7]) << 19);
        $x[2] ^= $x[1];
        $x[3] += $x[2];
        $x[4] -= $x[3] ^ ((!$x[2]) >> 23);
        $x[5] ^= $x[4];
        $x[6] += $x[5];
        $x[7] -= $x[6] ^ Wrapping(KS_TAIL);
    };
}

/// Defines a hasher with its padding variant fixed at construction, so it
/// can be built through `Default` and used through `digest::Digest`.
macro_rules! impl_variant {
    ($name:ident, $variant:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            hasher: TigerHasher,
        }

        impl $name {
            pub fn new() -> Self {
                $name { hasher: TigerHasher::new($variant) }
            }

            pub fn variant(&self) -> Variant {
                self.hasher.variant()
            }

            pub fn block_size(&self) -> usize {
                self.hasher.block_size()
            }

            pub fn output_size(&self) -> usize {
                self.hasher.output_size()
            }

            /// Feed `input` into the hasher.
            pub fn update(&mut self, input: &[u8]) {
                self.hasher.update(input);
            }

            /// Digest of everything fed so far. The hasher stays usable.
            pub fn sum(&self) -> Output {
                self.hasher.sum()
            }

            /// Append the current digest to `prefix`.
            #[cfg(feature = "std")]
            pub fn sum_append(&self, prefix: Vec<u8>) -> Vec<u8> {
                self.hasher.sum_append(prefix)
            }

            pub fn reset(&mut self) {
                self.hasher.reset();
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl BlockInput for $name {
            type BlockSize = U64;
        }

        impl Input for $name {
            fn input<B: AsRef<[u8]>>(&mut self, input: B) {
                self.hasher.update(input.as_ref());
            }
        }

        impl FixedOutput for $name {
            type OutputSize = U24;

            fn fixed_result(self) -> Output {
                self.hasher.fixed_result()
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.hasher.reset();
            }
        }

        impl_opaque_debug!($name);
        impl_write!($name);
    };
}
