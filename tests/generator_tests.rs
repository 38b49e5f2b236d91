//! Integration tests for class-based password generation.
//!
//! These tests exercise the public generator API:
//! - Fixed counts from explicit alphabets
//! - Clamping of negative, inverted and oversized bounds
//! - Length ranges over repeated draws
//! - Per-class uniqueness and alphabet membership

use std::collections::HashSet;

use classpass::pass::{
    Bounds, Class, GeneratorConfig, PasswordGenerator, Pick, Request, Source, default_lowercase,
    default_number, default_special, default_uppercase,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn union(alphabets: &[Vec<char>]) -> HashSet<char> {
    alphabets.iter().flatten().copied().collect()
}

// ============================================================================
// Test Module: Concrete scenarios
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_fixed_counts_small_alphabets() {
        let mut generator = PasswordGenerator::new(
            vec!['A', 'B', 'C'],
            vec!['x', 'y', 'z'],
            vec!['0', '7', '9'],
            vec!['#', '@', '!'],
        );
        let allowed: HashSet<char> = "ABCxyz079#@!".chars().collect();
        let request = Request::default()
            .upper(Pick::Count(2))
            .lower(Pick::Count(2))
            .number(Pick::Count(1))
            .special(Pick::Count(1));

        for seed in 0..200 {
            let password = generator.generate_with(&mut StdRng::seed_from_u64(seed), request);
            assert_eq!(password.chars().count(), 6);
            assert!(password.chars().all(|c| allowed.contains(&c)));

            let count_in = |set: &str| password.chars().filter(|c| set.contains(*c)).count();
            assert_eq!(count_in("ABC"), 2);
            assert_eq!(count_in("xyz"), 2);
            assert_eq!(count_in("079"), 1);
            assert_eq!(count_in("#@!"), 1);
        }
    }

    #[test]
    fn test_numeric_only_range() {
        let mut generator = PasswordGenerator::new(false, false, true, false);
        let request = Request::default()
            .upper(false)
            .lower(false)
            .number(Pick::Range(2, 4))
            .special(false);

        for _ in 0..200 {
            let password = generator.generate(request);
            assert!((2..=4).contains(&password.len()), "got {password:?}");
            assert!(password.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_disabled_upper_with_zero_count() {
        let mut generator = PasswordGenerator::new(
            false,
            Source::chars("abcd"),
            Source::chars("0159"),
            Source::chars("#@!&"),
        );
        let allowed: HashSet<char> = "abcd0159#@!&".chars().collect();
        let request = Request::default()
            .upper(Pick::Count(0))
            .lower(Pick::Count(2))
            .number(Pick::Count(1))
            .special(Pick::Count(1));

        for _ in 0..200 {
            let password = generator.generate(request);
            assert_eq!(password.len(), 4);
            assert!(password.chars().all(|c| allowed.contains(&c)));
        }
    }

    #[test]
    fn test_special_only_oversized_range() {
        let mut generator = PasswordGenerator::new(false, false, false, true);
        let request = Request::default()
            .upper(Pick::Count(0))
            .lower(Pick::Count(0))
            .number(Pick::Count(0))
            .special(Pick::Range(0, 100));

        let mut saw_full = false;
        for seed in 0..500 {
            let password: Vec<char> = generator
                .generate_with(&mut StdRng::seed_from_u64(seed), request)
                .chars()
                .collect();
            assert_eq!(generator.bounds(Class::Special), Some(Bounds { min: 0, max: 13 }));
            assert!(password.len() <= 13);

            let unique: HashSet<char> = password.iter().copied().collect();
            assert_eq!(unique.len(), password.len());
            assert!(unique.is_subset(&default_special().into_iter().collect()));
            if password.len() == 13 {
                saw_full = true;
                assert_eq!(unique, default_special().into_iter().collect());
            }
        }
        assert!(saw_full, "no full-length draw in 500 seeds");
    }

    #[test]
    fn test_fixed_oversized_count_is_exact_alphabet() {
        let mut generator = PasswordGenerator::new(false, false, false, true);
        let request = Request::default().special(Pick::Count(100));
        let password: HashSet<char> = generator.generate(request).chars().collect();
        assert_eq!(password, default_special().into_iter().collect());
    }

    #[test]
    fn test_all_defaults_with_ranges() {
        let mut generator = PasswordGenerator::default();
        let allowed = union(&[
            default_uppercase(),
            default_lowercase(),
            default_number(),
            default_special(),
        ]);
        let request = Request::default()
            .upper(Pick::Range(5, 10))
            .lower(Pick::Range(5, 10))
            .number(Pick::Range(3, 4))
            .special(Pick::Range(2, 4));

        for _ in 0..500 {
            let password = generator.generate(request);
            assert!((15..=28).contains(&password.len()), "got {}", password.len());
            assert!(password.chars().all(|c| allowed.contains(&c)));
        }
        assert_eq!(generator.length_range(), (15, 28));
    }
}

// ============================================================================
// Test Module: Bound normalization
// ============================================================================

mod bounds_tests {
    use super::*;

    #[test]
    fn test_negative_equals_omitted() {
        for class in Class::ALL {
            let negative = GeneratorConfig::new().bounds(class, -1, -8).build();
            let omitted = PasswordGenerator::default();
            assert_eq!(negative.bounds(class), omitted.bounds(class));
        }
    }

    #[test]
    fn test_negative_override_restores_defaults() {
        let mut generator = PasswordGenerator::default();
        generator.generate(Request::default().lower(Pick::Range(10, 12)));
        assert_eq!(generator.bounds(Class::Lowercase), Some(Bounds { min: 10, max: 12 }));

        generator.generate(Request::default().lower(Pick::Count(-1)));
        assert_eq!(generator.bounds(Class::Lowercase), Some(Bounds { min: 4, max: 7 }));
    }

    #[test]
    fn test_inverted_bounds_collapse() {
        let generator = GeneratorConfig::new()
            .bounds(Class::Uppercase, 6, 3)
            .bounds(Class::Special, 40, 20)
            .build();
        assert_eq!(generator.bounds(Class::Uppercase), Some(Bounds { min: 3, max: 3 }));
        assert_eq!(generator.bounds(Class::Special), Some(Bounds { min: 13, max: 13 }));
    }

    #[test]
    fn test_bounds_within_alphabet_for_many_inputs() {
        let values = [-100, -1, 0, 1, 2, 3, 5, 13, 26, 27, 1000];
        for class in Class::ALL {
            for &min in &values {
                for &max in &values {
                    let generator = GeneratorConfig::new().bounds(class, min, max).build();
                    let len = class.default_alphabet().len();
                    let Some(b) = generator.bounds(class) else {
                        panic!("{class} disabled");
                    };
                    assert!(b.min <= b.max, "{class} {min}..{max} -> {b:?}");
                    assert!(b.max <= len, "{class} {min}..{max} -> {b:?}");
                }
            }
        }
    }
}

// ============================================================================
// Test Module: Sampling properties
// ============================================================================

mod sampling_tests {
    use super::*;

    #[test]
    fn test_no_class_repeats_a_character() {
        let mut generator = PasswordGenerator::default();
        let request = Request::default()
            .upper(Pick::Count(26))
            .lower(Pick::Count(26))
            .number(Pick::Count(10))
            .special(Pick::Count(13));

        for _ in 0..50 {
            let password = generator.generate(request);
            let unique: HashSet<char> = password.chars().collect();
            assert_eq!(password.len(), 75);
            assert_eq!(unique.len(), 75);
        }
    }

    #[test]
    fn test_all_classes_disabled_is_empty() {
        let mut generator = PasswordGenerator::default();
        let request = Request::default()
            .upper(false)
            .lower(false)
            .number(false)
            .special(false);
        assert_eq!(generator.generate(request), "");
    }

    #[test]
    fn test_length_matches_class_counts_without_shuffle() {
        let mut generator = PasswordGenerator::default();
        let request = Request::default().shuffle(false);

        for seed in 0..100 {
            let password: Vec<char> = generator
                .generate_with(&mut StdRng::seed_from_u64(seed), request)
                .chars()
                .collect();

            // Unshuffled output is grouped by class in fixed order.
            let mut counts = [0usize; 4];
            let mut last = 0;
            for c in &password {
                let class = Class::ALL
                    .iter()
                    .position(|cl| cl.default_alphabet().contains(c))
                    .unwrap();
                assert!(class >= last, "class order broken in {password:?}");
                last = class;
                counts[class] += 1;
            }
            for (class, n) in Class::ALL.iter().zip(counts) {
                let b = generator.bounds(*class).unwrap();
                assert!((b.min..=b.max).contains(&n), "{class}: {n} outside {b:?}");
            }
        }
    }

    #[test]
    fn test_every_alphabet_position_reachable() {
        let mut generator = PasswordGenerator::new(false, false, true, false);
        let request = Request::default().number(Pick::Count(1));
        let mut seen = HashSet::new();
        for seed in 0..500 {
            seen.extend(
                generator
                    .generate_with(&mut StdRng::seed_from_u64(seed), request)
                    .chars(),
            );
        }
        assert_eq!(seen, default_number().into_iter().collect());
    }
}
