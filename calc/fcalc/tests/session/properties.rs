//! Session invariants over generated input.

use proptest::prelude::*;

use fcalc_eval::SessionState;

use crate::common::run;

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "eval", "poly", "mul", "add", "comp", "log", "del", "help", "resize", "x", "-",
        ])
        .prop_map(str::to_string),
        (-3i64..12).prop_map(|n| n.to_string()),
        (-5.0f64..5.0).prop_map(|x| format!("{x:.1}")),
    ]
}

fn line() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 0..6).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn polynomial_eval_matches_sum_of_terms(
        coefficients in prop::collection::vec(-9i32..10, 1..6),
        x in -4i32..5,
    ) {
        let listed: Vec<String> = coefficients.iter().map(ToString::to_string).collect();
        let input = format!("poly {} {}\neval 2 {x}\n", coefficients.len(), listed.join(" "));
        let done = run(10, &input);

        let expected: f64 = coefficients
            .iter()
            .zip(0i32..)
            .map(|(&c, power)| f64::from(c) * f64::from(x).powi(power))
            .sum();
        let needle = format!(" = {expected:.2}\n");
        prop_assert!(done.output.contains(&needle), "missing `{}` in output", needle.trim());
    }

    #[test]
    fn delete_shifts_later_indices(count in 1usize..6, victim in 0usize..8) {
        let mut input = String::new();
        for c in 0..count {
            input.push_str(&format!("poly 1 {}\n", c + 10));
        }
        input.push_str(&format!("del {victim}\n"));
        let done = run(20, &input);

        let mut expected: Vec<String> = vec!["sin(x)".into(), "ln(x)".into()];
        expected.extend((0..count).map(|c| (c + 10).to_string()));
        if victim < expected.len() {
            expected.remove(victim);
        } else {
            prop_assert_eq!(done.count("E2002"), 1);
        }
        prop_assert_eq!(done.functions(), expected);
    }

    #[test]
    fn any_input_ends_cleanly_within_capacity(lines in prop::collection::vec(line(), 0..12)) {
        let mut input = lines.join("\n");
        input.push('\n');
        let done = run(6, &input);

        prop_assert_eq!(done.interp.state(), SessionState::Exited);
        let registry = done.interp.registry();
        let max = registry.max_size().unwrap_or(usize::MAX);
        // Only a declined shrink may leave more functions than capacity, and
        // that needs a `resize` answered with 2.
        if !input.contains("resize") {
            prop_assert!(registry.len() <= max);
        }
    }
}
