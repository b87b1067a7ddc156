use cfc_core::Word;
use cfc_dict::Dictionary;
use proptest::prelude::*;

/// Exhaustive comma-freeness oracle over an accepted word list.
fn is_commafree(words: &[Word]) -> bool {
    let Some(first) = words.first() else {
        return true;
    };
    let n = first.len();
    for a in words {
        for b in words {
            let mut joined = a.symbols().to_vec();
            joined.extend_from_slice(b.symbols());
            for inner in words {
                if (1..n).any(|offset| joined[offset..offset + n] == *inner.symbols()) {
                    return false;
                }
            }
        }
    }
    true
}

#[test]
fn letter_words_reject_the_boundary_straddler() {
    let mut dict = Dictionary::new(4).unwrap();
    let as_word = |text: &str| Word::new(text.chars().map(|c| c as u32).collect());

    dict.add(&as_word("dead"), true).unwrap();
    dict.add(&as_word("beaf"), true).unwrap();
    dict.add(&as_word("aced"), true).unwrap();
    // "beaf aced" reads b e a f a c e d, and "face" sits right across the
    // boundary, so the fourth word must bounce.
    assert!(dict.add(&as_word("face"), true).is_err());
    assert_eq!(dict.len(), 3);
    assert!(is_commafree(&dict.list()));
}

#[test]
fn fingerprint_tracks_accepted_sequence() {
    let mut dict = Dictionary::new(3).unwrap();
    let empty = dict.fingerprint();
    dict.add(&Word::new(vec![0, 0, 1]), true).unwrap();
    let one = dict.fingerprint();
    assert_ne!(empty, one);

    let mut replay = Dictionary::new(3).unwrap();
    replay.add(&Word::new(vec![0, 0, 1]), true).unwrap();
    assert_eq!(one, replay.fingerprint());
}

proptest! {
    // Whatever the candidate stream, a strict dictionary may only ever hold
    // a comma-free set.
    #[test]
    fn strict_acceptance_preserves_comma_freeness(
        words in prop::collection::vec(prop::collection::vec(0u32..3, 4), 0..24),
    ) {
        let mut dict = Dictionary::new(4).unwrap();
        for symbols in words {
            let _ = dict.add(&Word::new(symbols), true);
        }
        prop_assert!(is_commafree(&dict.list()));
    }

    // Relaxed mode still never accepts two words from the same cyclic class.
    #[test]
    fn relaxed_acceptance_keeps_classes_distinct(
        words in prop::collection::vec(prop::collection::vec(0u32..3, 3), 0..24),
    ) {
        let mut dict = Dictionary::new(3).unwrap();
        for symbols in words {
            let _ = dict.add(&Word::new(symbols), false);
        }
        let accepted = dict.list();
        for (idx, a) in accepted.iter().enumerate() {
            prop_assert!(a.is_aperiodic());
            for b in accepted.iter().skip(idx + 1) {
                for shift in 0..a.len() {
                    prop_assert_ne!(&a.rotated_left(shift), b);
                }
            }
        }
    }
}
