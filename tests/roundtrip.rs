use ac16::{decode, encode, encoded_bits};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

proptest! {
    #[test]
    fn roundtrip_any_bytes(input in prop::collection::vec(any::<u8>(), 0..4096)) {
        let compressed = encode(&input);
        prop_assert_eq!(decode(&compressed, input.len()).unwrap(), input);
    }

    #[test]
    fn roundtrip_small_alphabet(
        input in prop::collection::vec(0..4u8, 1..6000),
        offset in any::<u8>(),
    ) {
        let input: Vec<u8> = input.iter().map(|&s| s.wrapping_add(offset)).collect();
        let compressed = encode(&input);
        prop_assert_eq!(decode(&compressed, input.len()).unwrap(), input);
    }

    #[test]
    fn prefix_decodes(input in prop::collection::vec(any::<u8>(), 1..1024), cut in any::<prop::sample::Index>()) {
        let len = cut.index(input.len());
        let compressed = encode(&input);
        prop_assert_eq!(decode(&compressed, len).unwrap(), &input[..len]);
    }

    #[test]
    fn bit_count_agrees(input in prop::collection::vec(any::<u8>(), 0..2048)) {
        let bits = encoded_bits(&input);
        prop_assert_eq!(encode(&input).len() as u64, bits.div_ceil(8));
    }
}

#[test]
fn every_byte_value() {
    let input: Vec<u8> = (0..=255).collect();
    let compressed = encode(&input);
    assert_eq!(decode(&compressed, 256).unwrap(), input);
}

#[test]
fn random_1000_bytes() {
    let input = random_bytes(1000, 1000);
    let compressed = encode(&input);
    assert_eq!(decode(&compressed, input.len()).unwrap(), input);
}

#[test]
fn random_lengths() {
    let mut rng = StdRng::seed_from_u64(42);
    for seed in 0..20 {
        let len = rng.gen_range(0..8000);
        let input = random_bytes(seed, len);
        let compressed = encode(&input);
        assert_eq!(decode(&compressed, len).unwrap(), input, "seed {seed}, len {len}");
    }
}

#[test]
fn long_skewed_stream() {
    // crosses several rescales
    let mut rng = StdRng::seed_from_u64(7);
    let input: Vec<u8> = (0..200_000)
        .map(|_| if rng.gen_ratio(15, 16) { b'e' } else { rng.gen() })
        .collect();
    let compressed = encode(&input);
    assert!(compressed.len() < input.len() / 2);
    assert_eq!(decode(&compressed, input.len()).unwrap(), input);
}

#[test]
fn repeated_byte_compresses() {
    for n in [1000, 5000, 50_000] {
        let input = vec![b'x'; n];
        let compressed = encode(&input);
        assert!(compressed.len() < n / 8, "{n} -> {}", compressed.len());
        assert_eq!(decode(&compressed, n).unwrap(), input);
    }
}

#[test]
fn random_data_barely_expands() {
    let input = random_bytes(99, 20_000);
    let compressed = encode(&input);
    assert!(compressed.len() < input.len() + input.len() / 100);
}

#[test]
fn deterministic_output() {
    let input = random_bytes(3, 4096);
    assert_eq!(encode(&input), encode(&input));
}

#[test]
fn concurrent_calls_are_independent() {
    let inputs: Vec<Vec<u8>> = (0..32).map(|seed| random_bytes(seed, 2000 + seed as usize * 37)).collect();
    let sequential: Vec<Vec<u8>> = inputs.iter().map(|input| encode(input)).collect();
    let parallel: Vec<Vec<u8>> = inputs.par_iter().map(|input| encode(input)).collect();
    assert_eq!(sequential, parallel);

    inputs.par_iter().zip(parallel.par_iter()).for_each(|(input, compressed)| {
        assert_eq!(&decode(compressed, input.len()).unwrap(), input);
    });
}
