//! Property-based tests for classification, filtering, pagination and counts.

use proptest::prelude::*;
use pwd_vault::{
    CredentialRecord, PasswordStrength, Requirement, StrengthCounts, classify, feedback,
    filter_records, paginate,
};
use secrecy::SecretString;

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

fn record(index: usize, resource: &str, username: &str, strength: Option<PasswordStrength>) -> CredentialRecord {
    let mut r = CredentialRecord::new(
        index.to_string(),
        "owner",
        resource,
        "https://example.com",
        username,
        secret("placeholder"),
        None,
    );
    r.strength = strength;
    r
}

fn strength_strategy() -> impl Strategy<Value = Option<PasswordStrength>> {
    prop_oneof![
        Just(None),
        Just(Some(PasswordStrength::Weak)),
        Just(Some(PasswordStrength::Medium)),
        Just(Some(PasswordStrength::Strong)),
    ]
}

fn records_strategy() -> impl Strategy<Value = Vec<CredentialRecord>> {
    proptest::collection::vec(("[a-zA-Z]{0,8}", "[a-zA-Z]{0,8}", strength_strategy()), 0..40).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (resource, username, strength))| record(i, &resource, &username, strength))
                .collect()
        },
    )
}

// Classification is total and deterministic, and agrees with the feedback list.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn classify_is_deterministic(s in ".*") {
        let pwd = secret(&s);
        let first = classify(&pwd);
        prop_assert_eq!(first, classify(&pwd));
        prop_assert!(PasswordStrength::ALL.contains(&first));
    }

    #[test]
    fn classify_matches_feedback_score(s in ".+") {
        let pwd = secret(&s);
        let unmet = feedback(&pwd);
        let score = (Requirement::ALL.len() - unmet.len()) as u8;
        prop_assert_eq!(classify(&pwd), PasswordStrength::from_score(score));
    }

    #[test]
    fn feedback_keeps_fixed_order(s in ".*") {
        let unmet = feedback(&secret(&s));
        let expected: Vec<Requirement> = Requirement::ALL
            .into_iter()
            .filter(|r| unmet.contains(r))
            .collect();
        prop_assert_eq!(unmet, expected);
    }
}

// Pagination covers exactly n items with ceil(n / p) pages.
proptest! {
    #[test]
    fn pagination_covers_all_items(n in 0usize..500, p in 1usize..60) {
        let first = paginate(n, p, 1);
        prop_assert_eq!(first.total_pages, n.div_ceil(p));

        let mut covered = 0;
        for page in 1..=first.page_count() {
            let window = paginate(n, p, page);
            prop_assert_eq!(window.first_index, covered);
            prop_assert!(window.range().len() <= p);
            covered = window.last_index;
        }
        prop_assert_eq!(covered, n);
    }

    #[test]
    fn pagination_window_always_in_bounds(n in 0usize..200, p in 0usize..60, page in 0usize..100) {
        let window = paginate(n, p, page);
        prop_assert!(window.first_index <= window.last_index);
        prop_assert!(window.last_index <= n);
        prop_assert!(window.current_page >= 1);
        prop_assert!(window.current_page <= window.page_count());
    }
}

// Filtering is idempotent and the empty search is the identity.
proptest! {
    #[test]
    fn filter_is_idempotent(records in records_strategy(), search in "[a-zA-Z]{0,3}") {
        let once = filter_records(&records, &search);
        let twice = filter_records(once.iter().copied(), &search);
        let once_ids: Vec<&str> = once.iter().map(|r| r.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn empty_search_returns_everything(records in records_strategy()) {
        let all = filter_records(&records, "");
        prop_assert_eq!(all.len(), records.len());
        for (kept, original) in all.iter().zip(records.iter()) {
            prop_assert_eq!(&kept.id, &original.id);
        }
    }

    #[test]
    fn counts_always_sum_to_total(records in records_strategy()) {
        let counts = StrengthCounts::from_records(&records);
        prop_assert_eq!(counts.weak + counts.medium + counts.strong, counts.total);
        prop_assert_eq!(counts.total, records.len());
    }
}
