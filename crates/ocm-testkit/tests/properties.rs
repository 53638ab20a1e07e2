//! Properties of the canonicalization pipeline over generated exposition text.
use proptest::prelude::*;

use ocm_testkit::{compare, normalize};

const NO_FILTER: Option<&[&str]> = None;

fn label() -> impl Strategy<Value = String> {
    ("[a-z_]{1,8}", "[A-Za-z0-9 ._-]{0,8}").prop_map(|(k, v)| format!("{k}=\"{v}\""))
}

fn line() -> impl Strategy<Value = (String, Vec<String>, u32)> {
    ("[a-z_]{1,12}", prop::collection::vec(label(), 0..6), any::<u32>())
}

fn render(name: &str, labels: &[String], value: u32) -> String {
    format!("{name}{{{}}} {value}", labels.join(","))
}

proptest! {
    #[test]
    fn normalization_is_idempotent(lines in prop::collection::vec(line(), 0..12)) {
        let text: Vec<String> = lines.iter().map(|(n, l, v)| render(n, l, *v)).collect();
        let once = normalize(&text.join("\n"), NO_FILTER).unwrap();
        let twice = normalize(&once.to_string(), NO_FILTER).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn line_and_label_order_do_not_matter(
        (lines, shuffled) in prop::collection::vec(line(), 1..12).prop_flat_map(|lines| {
            let shuffled = Just(lines.clone())
                .prop_map(|ls| {
                    ls.into_iter()
                        .map(|(n, mut l, v)| {
                            l.reverse();
                            (n, l, v)
                        })
                        .collect::<Vec<_>>()
                })
                .prop_shuffle();
            (Just(lines), shuffled)
        })
    ) {
        let original: Vec<String> = lines.iter().map(|(n, l, v)| render(n, l, *v)).collect();
        let permuted: Vec<String> = shuffled.iter().map(|(n, l, v)| render(n, l, *v)).collect();

        prop_assert_eq!(
            normalize(&original.join("\n"), NO_FILTER).unwrap(),
            normalize(&permuted.join("\n"), NO_FILTER).unwrap()
        );
        prop_assert!(compare(&original.join("\n"), &permuted.join("\n"), NO_FILTER).is_ok());
    }

    #[test]
    fn blank_padding_does_not_matter(lines in prop::collection::vec(line(), 1..8), pad in "[ \t]{0,3}") {
        let plain: Vec<String> = lines.iter().map(|(n, l, v)| render(n, l, *v)).collect();
        let padded: Vec<String> = plain.iter().map(|l| format!("{pad}{l}{pad}\n")).collect();

        prop_assert!(compare(&plain.join("\n"), &padded.concat(), NO_FILTER).is_ok());
    }

    #[test]
    fn filter_ignores_indentation(
        kept in prop::collection::vec(line(), 1..6),
        dropped in prop::collection::vec(line(), 0..6),
        pad in "[ \t]{0,8}"
    ) {
        let kept: Vec<String> = kept.iter().map(|(n, l, v)| render(&format!("keep_{n}"), l, *v)).collect();
        let dropped: Vec<String> = dropped.iter().map(|(n, l, v)| render(&format!("drop_{n}"), l, *v)).collect();
        let indented: String = kept.iter().map(|l| format!("\n{pad}{l}")).collect::<String>() + "\n" + &pad;
        let actual = [kept.as_slice(), dropped.as_slice()].concat().join("\n");

        prop_assert!(compare(&indented, &actual, Some(&["keep_"][..])).is_ok());
    }
}
