#[macro_use]
extern crate hex_literal;
extern crate digest;
extern crate tiger;

use std::fmt::Debug;
use std::io;

use digest::Digest;
use digest::dev::{digest_test, one_million_a};
use tiger::{Tiger, Tiger2, TigerHasher, Variant};

fn run_vectors<D>(vectors: &[(&[u8], &[u8])])
    where D: Digest + Debug + Clone
{
    for (i, &(input, output)) in vectors.iter().enumerate() {
        if let Some(desc) = digest_test::<D>(input, output) {
            panic!("\nFailed test №{}: {}\ninput:\t{:?}\noutput:\t{:?}\n",
                   i, desc, input, output);
        }
    }
}

const TITLE: &[u8] = b"Tiger - A Fast New Hash Function, by Ross Anderson and Eli Biham";

#[test]
fn tiger_main() {
    let zeros = [0u8; 64];
    let vectors: &[(&[u8], &[u8])] = &[
        (b"", &hex!("3293AC630C13F0245F92BBB1766E16167A4E58492DDE73F3")),
        (b"abc", &hex!("2AAB1484E8C158F2BFB8C5FF41B57A525129131C957B5F93")),
        (b"Tiger", &hex!("DD00230799F5009FEC6DEBC838BB6A27DF2B9D6F110C7937")),
        (b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+-",
         &hex!("8A55F01B6EE1613401D6D9DB1C5F74E23BE2D17A15F177AB")),
        (TITLE, &hex!("8A866829040A410C729AD23F5ADA711603B3CDD357E4C15E")),
        (&zeros[..55], &hex!("A4EE394B2A208E9B0A74C6D57568E470F6E658C44689FC63")),
        (&zeros[..63], &hex!("A857DD168B22B65A6DD2EA8035C4EDC4B890453D14BA6052")),
        (&zeros[..64], &hex!("33FF9966DDD692427A9BC4D611F3C74CF629A0544A1A7ED7")),
        (&[b'a'; 63], &hex!("9366604EA109E48ED763CAABB2D5633B4946EB295EF5781A")),
        (&[b'a'; 64], &hex!("7503F313BBEA92EDDCA90C5D3FCC4368237457DF366FB76E")),
    ];
    run_vectors::<Tiger>(vectors);
}

#[test]
fn tiger2_main() {
    let zeros = [0u8; 64];
    let vectors: &[(&[u8], &[u8])] = &[
        (b"", &hex!("4441BE75F6018773C206C22745374B924AA8313FEF919F41")),
        (b"abc", &hex!("F68D7BC5AF4B43A06E048D7829560D4A9415658BB0B1F3BF")),
        (b"Tiger", &hex!("FE40798B8EB937FD977608930548D6A894C20B04CBEF7A42")),
        (b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+-",
         &hex!("E98D7527360744EE56BC56C0D293AAE5F370000A67734DD7")),
        (TITLE, &hex!("F05589B5B897C0F81F16266F79E3625E0D4D4A4E343E5EF9")),
        (&zeros[..55], &hex!("F67D481B1789E12356FB1A503BDC210E1E9AE3A6C07DE567")),
        (&zeros[..63], &hex!("25B9983C329C8278136D6AD92D88A1EA53B11842FFEB93C6")),
        (&zeros[..64], &hex!("9AE268E25C6F98E0D8AA9859AA81681E2AA1442708670F73")),
        (&[b'a'; 63], &hex!("1C64A0BB5593DD22CC268788A3ABB73BA41F401997199559")),
        (&[b'a'; 64], &hex!("5365C9D3645CE0EF37BB38F5155B88A29BC6B689AC2D848D")),
    ];
    run_vectors::<Tiger2>(vectors);
}

#[test]
fn tiger_1million_a() {
    let output = include_bytes!("data/tiger_one_million_a.bin");
    one_million_a::<Tiger>(output);
}

#[test]
fn tiger2_1million_a() {
    let output = include_bytes!("data/tiger2_one_million_a.bin");
    one_million_a::<Tiger2>(output);
}

#[test]
fn arbitrary_chunking() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i * 31 + 7) as u8).collect();
    let expected = Tiger::digest(&data);

    for &step in &[1usize, 3, 7, 55, 56, 63, 64, 65, 127, 500] {
        let mut hasher = Tiger::new();
        for (i, chunk) in data.chunks(step).enumerate() {
            hasher.update(chunk);
            if i % 2 == 0 {
                hasher.update(&[]);
            }
        }
        assert_eq!(hasher.sum(), expected, "chunk size {}", step);
    }

    // Uneven chunk sizes, cycling through the block boundary cases.
    let sizes = [0usize, 1, 62, 2, 0, 64, 129, 9, 56];
    let mut hasher = Tiger::new();
    let mut rest = &data[..];
    for &size in sizes.iter().cycle() {
        if rest.is_empty() {
            break;
        }
        let take = size.min(rest.len());
        hasher.update(&rest[..take]);
        rest = &rest[take..];
    }
    assert_eq!(hasher.sum(), expected);
}

#[test]
fn sum_then_continue() {
    let mut hasher = Tiger2::new();
    hasher.update(b"Tiger");
    let first = hasher.sum();
    assert_eq!(first[..], hex!("FE40798B8EB937FD977608930548D6A894C20B04CBEF7A42")[..]);

    hasher.update(&TITLE[5..]);
    let second = hasher.sum();
    assert_eq!(second[..], hex!("F05589B5B897C0F81F16266F79E3625E0D4D4A4E343E5EF9")[..]);
    assert_ne!(first, second);
}

#[test]
fn reset_is_fresh() {
    let mut hasher = Tiger::new();
    hasher.update(TITLE);
    hasher.update(b"more");
    let _ = hasher.sum();
    hasher.reset();
    assert_eq!(hasher.sum(), Tiger::new().sum());

    let mut hasher = Tiger2::new();
    Digest::input(&mut hasher, TITLE);
    assert_eq!(hasher.result_reset(), Tiger2::digest(TITLE));
    assert_eq!(hasher.result(), Tiger2::new().sum());
}

#[test]
fn variants_differ() {
    assert_ne!(Tiger::new().sum(), Tiger2::new().sum());
    assert_eq!(
        TigerHasher::new(Variant::Tiger).sum(),
        Tiger::new().sum(),
    );
    assert_eq!(
        TigerHasher::new(Variant::Tiger2).sum(),
        Tiger2::new().sum(),
    );
}

#[test]
fn single_bit_avalanche() {
    let mut input = *b"The quick brown fox jumps over the lazy dog";
    let base = Tiger::digest(&input);

    for bit in 0..input.len() * 8 {
        input[bit / 8] ^= 1 << (bit % 8);
        let flipped = Tiger::digest(&input);
        input[bit / 8] ^= 1 << (bit % 8);

        let same = base.iter().zip(flipped.iter()).filter(|&(a, b)| a == b).count();
        // With 24 independent bytes a handful may collide by chance.
        assert!(same <= 6, "bit {}: {} unchanged bytes", bit, same);
    }
}

#[test]
fn write_and_append() {
    let mut hasher = TigerHasher::new(Variant::Tiger);
    let mut reader: &[u8] = TITLE;
    let n = io::copy(&mut reader, &mut hasher).unwrap();
    assert_eq!(n, TITLE.len() as u64);
    assert_eq!(hasher.sum()[..], hex!("8A866829040A410C729AD23F5ADA711603B3CDD357E4C15E")[..]);

    let out = hasher.sum_append(b"tiger:".to_vec());
    assert_eq!(&out[..6], b"tiger:");
    assert_eq!(&out[6..], &hasher.sum()[..]);
    assert_eq!(out.len(), 6 + hasher.output_size());
    assert_eq!(hasher.block_size(), 64);
}

#[test]
fn debug_is_opaque() {
    let mut hasher = Tiger::new();
    hasher.update(b"secret");
    assert_eq!(format!("{:?}", hasher), "Tiger { ... }");
    assert_eq!(format!("{:?}", TigerHasher::new(Variant::Tiger2)), "TigerHasher { ... }");
}
