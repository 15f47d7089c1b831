use crate::translate::Codon;
use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// A random sequence of `length` bytes drawn uniformly from `alpha`,
/// reproducible for a given `seed`.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// `count` random codons, reproducible for a given `seed`.
#[must_use]
pub fn rand_codons(count: usize, seed: u64) -> Vec<Codon> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (0..count)
        .map(|_| Codon::from_table_index(rng.next_u32() as usize % Codon::COUNT))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::translate::{GeneticCode, Translator};

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"ATGC", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (a, c, g, t) = random_sequence.iter().fold((0, 0, 0, 0), |(a, c, g, t), &b| match b {
            b'A' => (a + 1, c, g, t),
            b'C' => (a, c + 1, g, t),
            b'G' => (a, c, g + 1, t),
            b'T' => (a, c, g, t + 1),
            _ => (a, c, g, t),
        });

        assert!(a > 0);
        assert!(c > 0);
        assert!(g > 0);
        assert!(t > 0);
        assert_eq!(random_sequence, rand_sequence(b"ATGC", LEN, 42));
    }

    #[test]
    fn random_rna_translates_like_dna() {
        let code = GeneticCode::standard();
        let translator = Translator::new(&code);

        let rna = rand_sequence(b"ACGUacgu", 3 * 1000, 7);
        for triple in rna.chunks_exact(3) {
            let triple = std::str::from_utf8(triple).unwrap();
            let dna = triple.to_ascii_uppercase().replace('U', "T");
            assert_eq!(translator.translate_codon(triple), translator.translate_codon(&dna));
        }

        for codon in rand_codons(1000, 11) {
            let aa = code.translate(codon);
            assert!(code.codons(aa).contains(&codon));
        }
    }
}
