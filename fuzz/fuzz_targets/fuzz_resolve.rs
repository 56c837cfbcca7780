#![no_main]

use cfn_iam_sid::policy::check_policy_document;
use cfn_iam_sid::resolve::{Deferred, resolve_deferred};
use cfn_iam_sid::{Path, TemplateContext};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let base = Path::root().join("Doc");
    for (resolved, path) in resolve_deferred(&value, &base) {
        assert!(matches!(Deferred::classify(resolved), Deferred::Concrete(_)));
        assert!(path.segments().starts_with(base.segments()));
    }

    let _ = check_policy_document(&TemplateContext, &value, &base);
});
