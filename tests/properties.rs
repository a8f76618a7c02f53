//! Propriedades algébricas da lógica de senso comum, verificadas com proptest.

use common_sense_logic::core::{category, fuzzy};
use common_sense_logic::{Category, Logic};
use proptest::prelude::*;

fn any_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn any_logic() -> impl Strategy<Value = Logic> {
    prop::array::uniform5(0.0f64..1.0).prop_map(Logic::from)
}

/// Poucos valores possíveis por componente, para forçar empates e vetores nulos.
fn coarse_logic() -> impl Strategy<Value = Logic> {
    prop::array::uniform5(prop::sample::select(vec![0.0, 0.25, 0.5, 1.0])).prop_map(Logic::from)
}

fn close(a: &Logic, b: &Logic) -> bool {
    a.as_array()
        .iter()
        .zip(b.as_array())
        .all(|(x, y)| (x - y).abs() < 1e-7)
}

proptest! {
    #[test]
    fn scalar_operators_match_min_max(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        prop_assert_eq!(fuzzy::and([a, b]), a.min(b));
        prop_assert_eq!(fuzzy::or([a, b]), a.max(b));
        prop_assert!((fuzzy::not(a) - (1.0 - a)).abs() < 1e-12);
    }

    #[test]
    fn scalar_output_is_clamped(x in -10.0f64..10.0) {
        let clamped = fuzzy::clamp(x);
        prop_assert!((0.0..=1.0).contains(&clamped));
        prop_assert!((0.0..=1.0).contains(&fuzzy::not(x)));
    }

    #[test]
    fn not_is_an_involution(v in any_logic()) {
        prop_assert_eq!(!!v, v);
    }

    #[test]
    fn de_morgan_holds_for_vectors(a in any_logic(), b in any_logic()) {
        let and_then_not = !(a & b);
        let or_of_nots = !a | !b;
        prop_assert!(close(&and_then_not, &or_of_nots), "{} vs {}", and_then_not, or_of_nots);

        let or_then_not = !(a | b);
        let and_of_nots = !a & !b;
        prop_assert!(close(&or_then_not, &and_of_nots), "{} vs {}", or_then_not, and_of_nots);
    }

    #[test]
    fn normalization_is_idempotent(v in coarse_logic()) {
        let once = v.normalize();
        prop_assert_eq!(once.normalize(), once);
        if v.is_valid() {
            prop_assert!((once.scalar() - 1.0).abs() < 1e-12);
        } else {
            prop_assert_eq!(once, Logic::default());
        }
    }

    #[test]
    fn binary_results_are_normalized(a in any_logic(), b in any_logic()) {
        prop_assume!(a.is_valid() && b.is_valid());
        for result in [a & b, a | b] {
            prop_assert!(result.is_valid());
            prop_assert!((result.scalar() - 1.0).abs() < 1e-7);
        }
    }

    #[test]
    fn eq_and_ne_agree_with_dominance(v in coarse_logic(), c in any_category()) {
        let dominant = v.as_category();
        prop_assert_eq!(dominant.is_some(), v.is_valid());
        prop_assert_eq!(v.eq_category(c), dominant == Some(c));
        prop_assert_eq!(v.ne_category(c), dominant != Some(c));
        prop_assert_eq!(v == c, !(v != c));
    }

    #[test]
    fn one_hot_vectors_reduce_to_categories(a in any_category(), b in any_category()) {
        let (va, vb) = (Logic::from(a), Logic::from(b));
        prop_assert_eq!(va & vb, Logic::from(category::and(a, b)));
        prop_assert_eq!(va | vb, Logic::from(category::or(a, b)));
        prop_assert_eq!(!va, Logic::from(category::not(a)));
        prop_assert_eq!((va & vb).as_category(), Some(a & b));
    }

    #[test]
    fn scaling_keeps_dominant_category(v in coarse_logic(), factor in 0.1f64..10.0) {
        prop_assert_eq!(v.scale(factor).normalize().as_category(), v.as_category());
    }
}
