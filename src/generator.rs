use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!#$%&()*+";

const LETTER_COUNT: RangeInclusive<usize> = 8..=10;
const DIGIT_COUNT: RangeInclusive<usize> = 2..=4;
const SYMBOL_COUNT: RangeInclusive<usize> = 2..=4;

pub fn generate_password() -> String {
    generate_password_with(&mut rand::thread_rng())
}

/// Samples 8-10 letters, 2-4 digits and 2-4 symbols, then shuffles the lot.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut chars = Vec::with_capacity(*LETTER_COUNT.end() + *DIGIT_COUNT.end() + *SYMBOL_COUNT.end());
    sample_pool(rng, LETTERS, LETTER_COUNT, &mut chars);
    sample_pool(rng, DIGITS, DIGIT_COUNT, &mut chars);
    sample_pool(rng, SYMBOLS, SYMBOL_COUNT, &mut chars);
    chars.shuffle(rng);
    chars.into_iter().collect()
}

fn sample_pool<R: Rng + ?Sized>(rng: &mut R, pool: &[u8], count: RangeInclusive<usize>, out: &mut Vec<char>) {
    let n = rng.gen_range(count);
    for _ in 0..n {
        if let Some(&b) = pool.choose(rng) {
            out.push(b as char);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn count_in(password: &str, pool: &[u8]) -> usize {
        password.bytes().filter(|b| pool.contains(b)).count()
    }

    #[test]
    fn length_and_pool_counts_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let pw = generate_password_with(&mut rng);
            assert!((12..=18).contains(&pw.len()), "bad length: {pw}");
            assert!(LETTER_COUNT.contains(&count_in(&pw, LETTERS)), "{pw}");
            assert!(DIGIT_COUNT.contains(&count_in(&pw, DIGITS)), "{pw}");
            assert!(SYMBOL_COUNT.contains(&count_in(&pw, SYMBOLS)), "{pw}");
        }
    }

    #[test]
    fn only_pool_characters_are_used() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let pw = generate_password_with(&mut rng);
            assert!(pw
                .bytes()
                .all(|b| LETTERS.contains(&b) || DIGITS.contains(&b) || SYMBOLS.contains(&b)));
        }
    }

    #[test]
    fn every_count_in_range_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut lengths = std::collections::BTreeSet::new();
        for _ in 0..2000 {
            lengths.insert(generate_password_with(&mut rng).len());
        }
        assert_eq!(lengths.into_iter().collect::<Vec<_>>(), (12..=18).collect::<Vec<_>>());
    }

    #[test]
    fn characters_are_shuffled() {
        // Without the shuffle every password would start with a letter.
        let mut rng = StdRng::seed_from_u64(3);
        let starts_elsewhere = (0..200)
            .map(|_| generate_password_with(&mut rng))
            .any(|pw| !pw.as_bytes()[0].is_ascii_alphabetic());
        assert!(starts_elsewhere);
    }

    #[test]
    fn thread_rng_entry_point() {
        let pw = generate_password();
        assert!((12..=18).contains(&pw.len()));
    }

    #[test]
    fn pools_have_expected_sizes() {
        assert_eq!(LETTERS.len(), 52);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 9);
    }
}
