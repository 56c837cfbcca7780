#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let result = match cfn_iam_sid::lint(&s) {
        Ok(r) => r,
        Err(_) => return,
    };

    // Every finding must point at a Sid inside a resource's properties.
    for finding in result.findings() {
        let path = finding.path.to_string();
        if !path.starts_with("Resources/") || !path.ends_with("/Sid") {
            panic!("finding outside a Sid: {}", path);
        }
    }
});
