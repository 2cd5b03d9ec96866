//! Property tests for brace-range expansion

use proptest::prelude::*;
use retouch::expand;

prop_compose! {
    /// Text that cannot form a range placeholder
    fn arb_plain()(s in "[a-zA-Z0-9_./ -]{0,24}") -> String {
        s
    }
}

proptest! {
    /// Property: a valid ascending range yields end-start+1 names in order
    #[test]
    fn ascending_range_yields_every_integer(
        prefix in arb_plain(),
        suffix in arb_plain(),
        start in 0u64..10_000,
        len in 0u64..200,
    ) {
        let end = start + len;
        let pattern = format!("{}{{{}...{}}}{}", prefix, start, end, suffix);
        let names: Vec<String> = expand(&pattern).unwrap().collect();

        prop_assert_eq!(names.len() as u64, len + 1);
        for (i, name) in (start..=end).zip(&names) {
            prop_assert_eq!(name, &format!("{}{}{}", prefix, i, suffix));
        }
    }

    /// Property: a descending range yields nothing
    #[test]
    fn descending_range_is_empty(start in 1u64..1_000_000, gap in 1u64..1_000) {
        let end = start.saturating_sub(gap);
        prop_assume!(end < start);
        let pattern = format!("f{{{}...{}}}", start, end);
        prop_assert_eq!(expand(&pattern).unwrap().count(), 0);
    }

    /// Property: text without braces passes through unchanged
    #[test]
    fn plain_text_is_identity(s in arb_plain()) {
        let names: Vec<String> = expand(&s).unwrap().collect();
        prop_assert_eq!(names, vec![s]);
    }

    /// Property: expansion never panics on arbitrary input
    #[test]
    fn expand_never_panics(s in ".*") {
        let _ = expand(&s).map(|e| e.take(3).count());
    }
}
