use cfn_iam_sid::enums::FindingKind;
use cfn_iam_sid::policy::{check_policy_document, is_valid_sid};
use cfn_iam_sid::{Path, TemplateContext};
use proptest::prelude::*;
use serde_json::{Value, json};
use std::collections::HashSet;

/// Strategy for Sids that contain at least one disallowed character.
fn arb_invalid_sid() -> impl Strategy<Value = String> {
    ("[A-Za-z0-9]{0,6}", "[^A-Za-z0-9]", "[A-Za-z0-9]{0,6}")
        .prop_map(|(head, bad, tail)| format!("{}{}{}", head, bad, tail))
}

/// Strategy for a statement list where each entry may or may not carry a Sid.
fn arb_statements() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of("[A-Ca-c1-2!-]{0,2}"), 0..12)
}

fn document(sids: &[Option<String>]) -> Value {
    let statements: Vec<Value> = sids
        .iter()
        .map(|sid| match sid {
            Some(s) => json!({ "Sid": s, "Effect": "Allow" }),
            None => json!({ "Effect": "Allow" }),
        })
        .collect();
    json!({ "Statement": statements })
}

fn check(doc: &Value) -> Vec<cfn_iam_sid::Finding> {
    check_policy_document(&TemplateContext, doc, &Path::root().join("Doc"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Alphanumeric Sids, including the empty string, always pass.
    #[test]
    fn alphanumeric_sids_pass(sid in "[A-Za-z0-9]{0,32}") {
        prop_assert!(is_valid_sid(&sid));
        let findings = check(&json!({ "Statement": [{ "Sid": sid }] }));
        prop_assert!(findings.is_empty());
    }

    // Any disallowed character yields exactly one character finding at <policy>/Sid.
    #[test]
    fn invalid_sids_fail_once(sid in arb_invalid_sid()) {
        prop_assert!(!is_valid_sid(&sid));
        let findings = check(&json!({ "Statement": [{ "Sid": sid }] }));
        prop_assert_eq!(findings.len(), 1);
        prop_assert_eq!(findings[0].kind, FindingKind::InvalidSidCharacters);
        prop_assert_eq!(findings[0].path.to_string(), "Doc/Sid");
    }

    // Findings match a straightforward model of the two checks, in order.
    #[test]
    fn findings_match_model(sids in arb_statements()) {
        let mut expected = Vec::new();
        let mut seen = HashSet::new();
        let path = "Doc/Sid".to_string();
        for sid in sids.iter() {
            let Some(sid) = sid else { continue };
            if !sid.chars().all(|c| c.is_ascii_alphanumeric()) {
                expected.push((FindingKind::InvalidSidCharacters, path.clone()));
            }
            if !seen.insert(sid.clone()) {
                expected.push((FindingKind::DuplicateSid, path.clone()));
            }
        }

        let actual: Vec<(FindingKind, String)> = check(&document(&sids))
            .into_iter()
            .map(|f| (f.kind, f.path.to_string()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    // Statements without a Sid never change the outcome.
    #[test]
    fn sidless_statements_are_inert(sids in arb_statements()) {
        let with_gaps = check(&document(&sids)).len();
        let compact: Vec<Option<String>> = sids.iter().filter(|s| s.is_some()).cloned().collect();
        let without_gaps = check(&document(&compact)).len();
        prop_assert_eq!(with_gaps, without_gaps);
    }

    // The two branches of a conditional never see each other's Sids.
    #[test]
    fn branches_are_independent(sids in arb_statements()) {
        let doc = document(&sids);
        let single = check(&doc).len();
        let both = check(&json!({ "Fn::If": ["C", doc.clone(), doc] })).len();
        prop_assert_eq!(both, single * 2);
    }

    // A single statement record behaves like a one-element list.
    #[test]
    fn single_record_equals_singleton_list(sid in "[A-Za-z0-9 !_-]{0,8}") {
        let single = check(&json!({ "Statement": { "Sid": sid } }));
        let list = check(&json!({ "Statement": [{ "Sid": sid }] }));
        let kinds = |fs: &[cfn_iam_sid::Finding]| fs.iter().map(|f| f.kind).collect::<Vec<_>>();
        prop_assert_eq!(kinds(single.as_slice()), kinds(list.as_slice()));
    }
}
