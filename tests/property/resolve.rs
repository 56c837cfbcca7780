use cfn_iam_sid::resolve::{Deferred, resolve_deferred};
use cfn_iam_sid::{Path, PathSegment};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Strategy for arbitrary concrete JSON values nested up to `depth` levels.
fn arb_concrete(depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| json!(i)),
        "[a-z]{1,8}".prop_map(Value::String),
    ];

    leaf.prop_recursive(depth, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            // Two or more keys, so never mistaken for an intrinsic.
            prop::collection::vec(("[a-z]{1,4}", inner), 2..4).prop_map(|pairs| {
                let mut map: serde_json::Map<String, Value> = pairs.into_iter().collect();
                map.insert("Type".to_string(), json!("x"));
                map.insert("Props".to_string(), json!({}));
                Value::Object(map)
            }),
        ]
    })
}

/// Strategy for conditional trees over concrete leaves; some leaves are NoValue.
fn arb_conditional(depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        4 => arb_concrete(1),
        1 => Just(json!({ "Ref": "AWS::NoValue" })),
    ];
    leaf.prop_recursive(depth, 32, 2, |inner| {
        (inner.clone(), inner).prop_map(|(a, b)| json!({ "Fn::If": ["Cond", a, b] }))
    })
}

/// Reference count of concrete leaves reachable through conditional branches.
fn count_leaves(value: &Value) -> usize {
    match Deferred::classify(value) {
        Deferred::Concrete(_) => 1,
        Deferred::Conditional { branches, .. } => branches.iter().map(|b| count_leaves(b)).sum(),
        Deferred::NoValue | Deferred::Malformed => 0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Concrete values resolve to exactly themselves at the given path.
    #[test]
    fn concrete_is_identity(value in arb_concrete(3)) {
        let path = Path::root().join("Resources").join(0usize);
        let pairs = resolve_deferred(&value, &path);
        prop_assert_eq!(pairs.len(), 1);
        prop_assert_eq!(pairs[0].0, &value);
        prop_assert_eq!(&pairs[0].1, &path);
    }

    // Resolved values are never conditional and never NoValue.
    #[test]
    fn resolution_is_fully_flattened(value in arb_conditional(4)) {
        for (resolved, _) in resolve_deferred(&value, &Path::root()) {
            prop_assert!(matches!(Deferred::classify(resolved), Deferred::Concrete(_)));
        }
    }

    // One pair per concrete leaf, each under a distinct path.
    #[test]
    fn one_pair_per_leaf(value in arb_conditional(4)) {
        let pairs = resolve_deferred(&value, &Path::root());
        prop_assert_eq!(pairs.len(), count_leaves(&value));
        let mut paths: Vec<String> = pairs.iter().map(|(_, p)| p.to_string()).collect();
        paths.sort();
        paths.dedup();
        prop_assert_eq!(paths.len(), pairs.len());
    }

    // Every resolved path extends the input path with (Fn::If, 1|2) pairs.
    #[test]
    fn paths_extend_base_with_branch_steps(value in arb_conditional(4)) {
        let base = Path::root().join("Base");
        for (_, path) in resolve_deferred(&value, &base) {
            let segments = path.segments();
            prop_assert_eq!(&segments[..1], base.segments());
            let steps = &segments[1..];
            prop_assert_eq!(steps.len() % 2, 0);
            for pair in steps.chunks(2) {
                prop_assert_eq!(&pair[0], &PathSegment::Key("Fn::If".to_string()));
                prop_assert!(matches!(pair[1], PathSegment::Index(1) | PathSegment::Index(2)));
            }
        }
    }
}
