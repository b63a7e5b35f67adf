// Copyright (c) The towpath Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

// Unit coverage for root detection and the smaller pieces of the public
// surface; the parse/format corpora live in the integration tests.

use crate::{Dialect, PathParts, POSIX, WIN32};

#[test]
fn detect_root_posix() {
    let cases: &[(&str, usize, bool)] = &[
        ("", 0, false),
        ("foo", 0, false),
        ("/", 1, true),
        ("//", 2, true),
        ("///foo", 3, true),
        ("C:\\foo", 0, false),
    ];
    for &(path, len, absolute) in cases {
        let root = POSIX.detect_root(path);
        assert_eq!(root.len, len, "root length of {:?}", path);
        assert_eq!(root.absolute, absolute, "absoluteness of {:?}", path);
    }
}

#[test]
fn detect_root_windows() {
    let cases: &[(&str, usize, bool)] = &[
        ("", 0, false),
        ("file", 0, false),
        ("\\", 1, true),
        ("\\\\", 1, true),
        ("\\\\server", 1, true),
        ("\\foo\\C:", 1, true),
        ("C:", 2, false),
        ("C:abc", 2, false),
        ("C:\\", 3, true),
        ("C:/", 3, true),
        ("C:\\abc", 3, true),
        ("\\\\server\\share", 14, true),
        ("\\\\server\\share\\", 15, true),
        ("\\\\server\\share\\file", 15, true),
        ("//server/share/file", 15, true),
        ("\\\\?\\UNC\\server\\share", 8, true),
    ];
    for &(path, len, absolute) in cases {
        let root = WIN32.detect_root(path);
        assert_eq!(root.len, len, "root length of {:?}", path);
        assert_eq!(root.absolute, absolute, "absoluteness of {:?}", path);
    }
}

// The posix ruleset applies to whatever string it is handed; dialect
// selection, not content sniffing, decides which rules run.
#[test]
fn dialect_selection_is_explicit() {
    assert!(POSIX.detect_root("/foo/bar").is_rooted());
    assert_eq!(WIN32.parse("/foo/bar").root, "/");
    assert_eq!(POSIX.parse("C:\\foo").root, "");
}

#[test]
fn dialect_from_str() {
    assert_eq!("posix".parse::<Dialect>(), Ok(POSIX));
    assert_eq!("win32".parse::<Dialect>(), Ok(WIN32));

    let err = "ntfs".parse::<Dialect>().unwrap_err();
    assert_eq!(err.name(), "ntfs");
    assert_eq!(err.to_string(), "unrecognized path dialect: \"ntfs\"");
}

#[test]
fn dialect_constants() {
    assert_eq!(POSIX.separator(), '/');
    assert_eq!(POSIX.delimiter(), ':');
    assert_eq!(WIN32.separator(), '\\');
    assert_eq!(WIN32.delimiter(), ';');
    assert_eq!(POSIX.to_string(), "posix");
    assert_eq!(WIN32.to_string(), "win32");
    assert!(WIN32.is_separator('/'));
    assert!(WIN32.is_separator('\\'));
    assert!(!POSIX.is_separator('\\'));
}

#[test]
fn parts_from_parsed() {
    let parsed = POSIX.parse("/var/log/syslog.1");
    let parts = PathParts::from(&parsed);
    assert_eq!(parts.root, "/");
    assert_eq!(parts.dir, "/var/log");
    assert_eq!(parts.base, "syslog.1");
    assert_eq!(parts.ext, ".1");
    assert_eq!(parts.name, "syslog");
    assert_eq!(POSIX.format(parts), "/var/log/syslog.1");
}

#[cfg(feature = "serde1")]
#[test]
fn parsed_path_serde_round_trip() {
    let parsed = POSIX.parse("/home/user/file.txt");
    let json = serde_json::to_string(&parsed).unwrap();
    let back: crate::ParsedPath = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, back);
}

#[cfg(feature = "proptest1")]
mod props {
    use crate::{ParsedPath, POSIX, WIN32};
    use proptest::prelude::*;

    proptest! {
        // Clean paths (single separators, non-empty last segment) survive a
        // parse/format round trip byte for byte.
        #[test]
        fn clean_paths_round_trip(
            absolute in any::<bool>(),
            segments in prop::collection::vec("[a-z0-9 ._-]{1,8}", 1..8),
        ) {
            let mut path = String::new();
            if absolute {
                path.push('/');
            }
            path.push_str(&segments.join("/"));
            prop_assert_eq!(POSIX.format(&POSIX.parse(&path)), path);
        }

        // For arbitrary inputs, formatting a parse result reaches a fixed
        // point: parsing the formatted string gives the same components.
        #[test]
        fn parse_format_parse_is_idempotent(path in "[a-zA-Z0-9 ._/\\\\:-]{0,24}") {
            for dialect in &[POSIX, WIN32] {
                let first = dialect.parse(&path);
                let formatted = dialect.format(&first);
                prop_assert_eq!(&dialect.parse(&formatted), &first);
            }
        }

        // Generated values uphold the structural invariant.
        #[test]
        fn base_is_name_plus_ext(parsed in any::<ParsedPath>()) {
            prop_assert_eq!(format!("{}{}", parsed.name, parsed.ext), parsed.base);
        }
    }
}
