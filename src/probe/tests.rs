// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use super::{EnvVarSpec, REGISTRY, VarStatus, mask, probe_env, probe_with};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_mask_nine_chars() {
    assert_eq!(mask("123456789"), "1234*6789");
}

#[test]
fn test_mask_eight_chars_collapses() {
    assert_eq!(mask("abcdefgh"), "***");
}

#[test]
fn test_mask_twelve_chars() {
    assert_eq!(mask("abcdefghijkl"), "abcd****ijkl");
}

#[test]
fn test_mask_short_values_collapse() {
    assert_eq!(mask("a"), "***");
    assert_eq!(mask(""), "***");
}

#[test]
fn test_mask_counts_characters_not_bytes() {
    // 9 characters, 18 bytes
    assert_eq!(mask("ключключк"), "ключ*лючк");
}

#[test]
fn test_registry_order() {
    let names: Vec<_> = REGISTRY.iter().map(|spec| spec.name).collect();
    assert_eq!(
        names,
        ["PEXELS_API_KEYS", "PIXABAY_API_KEYS", "OPENAI_API_KEY"]
    );
}

#[test]
fn test_each_unset_var_reported_alone() {
    let all = [
        ("PEXELS_API_KEYS", "pexels-key-0001"),
        ("PIXABAY_API_KEYS", "pixabay-key-0001"),
        ("OPENAI_API_KEY", "sk-openai-0001"),
    ];

    for missing in 0..all.len() {
        let present: Vec<_> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != missing)
            .map(|(_, pair)| *pair)
            .collect();
        let reports = probe_with(REGISTRY, lookup_from(&present));

        for (i, report) in reports.iter().enumerate() {
            assert_eq!(
                report.is_set(),
                i != missing,
                "{} reported wrongly when {} is unset",
                report.spec.name,
                all[missing].0
            );
        }
    }
}

#[test]
fn test_empty_value_is_not_set() {
    let reports = probe_with(REGISTRY, lookup_from(&[("OPENAI_API_KEY", "")]));
    assert_eq!(reports[2].status, VarStatus::NotSet);
}

#[test]
fn test_report_lines() {
    let reports = probe_with(
        REGISTRY,
        lookup_from(&[
            ("PEXELS_API_KEYS", "abcdefghijkl"),
            ("PIXABAY_API_KEYS", "short"),
        ]),
    );
    let lines: Vec<_> = reports.iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    ✓ PEXELS_API_KEYS: abcd****ijkl
    ✓ PIXABAY_API_KEYS: ***
    ✗ OPENAI_API_KEY: Not set
    ");
}

#[cfg(unix)]
#[test]
fn test_non_unicode_value_is_set() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    const NAME: &str = "ENVPROBE_TEST_NON_UNICODE_VALUE";
    // SAFETY: the variable name is unique to this test.
    unsafe { std::env::set_var(NAME, OsStr::from_bytes(b"abcd\xffefghijkl")) };

    let registry = [EnvVarSpec {
        name: NAME,
        description: "non-unicode value",
    }];
    let reports = probe_env(&registry);

    assert!(reports[0].is_set());
    assert_eq!(
        reports[0].status,
        VarStatus::Set {
            masked: "abcd*****ijkl".to_string()
        }
    );
}
