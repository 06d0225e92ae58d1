//! Property tests for scanning and rendering totality

use proptest::prelude::*;
use tplfmt_core::template::{Scanner, SpanKind};
use tplfmt_core::{render, Bindings};

proptest! {
    /// Without bindings nothing can resolve, so rendering is the identity
    #[test]
    fn render_without_bindings_is_identity(s in "\\PC*") {
        prop_assert_eq!(render(&s, &Bindings::new()), s);
    }

    /// Same for template-heavy input built from marker fragments
    #[test]
    fn render_marker_soup_is_identity(
        parts in proptest::collection::vec(
            prop_oneof![
                Just("${"), Just("}"), Just("."), Just("{"), Just("$"),
                Just("a"), Just("b"), Just("ü"), Just(" "),
            ],
            0..40,
        )
    ) {
        let s = parts.concat();
        prop_assert_eq!(render(&s, &Bindings::new()), s);
    }

    /// Every span lies inside the text, starts with `${` and ends with `}`
    #[test]
    fn spans_are_well_formed(s in "[${}.ab]{0,30}") {
        for span in Scanner::new(&s) {
            let raw = span.raw(&s);
            prop_assert!(raw.starts_with("${"), "span must start with ${{");
            prop_assert!(raw.ends_with('}'), "span must end with }}");
            let content = &raw[2..raw.len() - 1];
            prop_assert!(!content.contains('}'), "span content must not contain }}");
            match span.kind {
                SpanKind::Direct { name } => {
                    prop_assert_eq!(name, content);
                    prop_assert!(!name.contains('.'));
                }
                SpanKind::Dotted { root, continuation } => {
                    prop_assert!(!root.is_empty() && !continuation.is_empty());
                    prop_assert_eq!(format!("{}.{}", root, continuation), content);
                }
            }
        }
    }

    /// Spans come out in strictly increasing open position
    #[test]
    fn spans_are_ordered(s in "[${}.ab]{0,30}") {
        let opens: Vec<usize> = Scanner::new(&s).map(|span| span.open).collect();
        prop_assert!(opens.windows(2).all(|w| w[0] < w[1]));
    }

    /// A single bound name always substitutes
    #[test]
    fn bound_name_substitutes(name in "[a-z]{1,8}", value in "[a-zA-Z0-9 ]{0,12}") {
        let bindings = Bindings::new().with(name.clone(), value.clone());
        let template = format!("<${{{}}}>", name);
        prop_assert_eq!(render(&template, &bindings), format!("<{}>", value));
    }
}
