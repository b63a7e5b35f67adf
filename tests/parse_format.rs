// Copyright (c) The towpath Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

// Parse/format corpus: every path in these tables must round-trip through
// format, report the expected root, and stay consistent with the derived
// basename/dirname/extname operations.

use towpath::{posix, win32, Dialect, ParsedPath, PathParts, POSIX, WIN32};

static WIN_PATHS: &[(&str, &str)] = &[
    // (path, expected root)
    ("C:\\path\\dir\\index.html", "C:\\"),
    ("C:\\another_path\\DIR\\1\\2\\33\\\\index", "C:\\"),
    ("another_path\\DIR with spaces\\1\\2\\33\\index", ""),
    ("\\", "\\"),
    ("\\foo\\C:", "\\"),
    ("file", ""),
    ("file:stream", ""),
    (".\\file", ""),
    ("C:", "C:"),
    ("C:.", "C:"),
    ("C:..", "C:"),
    ("C:abc", "C:"),
    ("C:\\", "C:\\"),
    ("C:\\abc", "C:\\"),
    ("", ""),
    // UNC
    ("\\\\server\\share\\file_path", "\\\\server\\share\\"),
    (
        "\\\\server two\\shared folder\\file path.zip",
        "\\\\server two\\shared folder\\",
    ),
    ("\\\\teela\\admin$\\system32", "\\\\teela\\admin$\\"),
    ("\\\\?\\UNC\\server\\share", "\\\\?\\UNC\\"),
];

static UNIX_PATHS: &[(&str, &str)] = &[
    // (path, expected root)
    ("/home/user/dir/file.txt", "/"),
    ("/home/user/a dir/another File.zip", "/"),
    ("/home/user/a dir//another&File.", "/"),
    ("/home/user/a$$$dir//another File.zip", "/"),
    ("user/dir/another File.zip", ""),
    ("file", ""),
    (".\\file", ""),
    ("./file", ""),
    ("C:\\foo", ""),
    ("/", "/"),
    ("", ""),
    (".", ""),
    ("..", ""),
    ("/foo", "/"),
    ("/foo.", "/"),
    ("/foo.bar", "/"),
    ("/.", "/"),
    ("/.foo", "/"),
    ("/.foo.bar", "/"),
    ("/foo/bar.baz", "/"),
];

fn check_parse_format(dialect: Dialect, paths: &[(&str, &str)]) {
    for &(path, root) in paths {
        let output = dialect.parse(path);
        assert_eq!(output.root, root, "root of {:?}", path);
        assert_eq!(dialect.format(&output), path, "round trip of {:?}", path);
        assert_eq!(output.base, dialect.basename(path), "basename of {:?}", path);
        assert_eq!(output.ext, dialect.extname(path), "extname of {:?}", path);
        if !output.dir.is_empty() {
            assert_eq!(output.dir, dialect.dirname(path), "dirname of {:?}", path);
        }
        let rebuilt = format!("{}{}", output.name, output.ext);
        assert_eq!(output.base, rebuilt, "base == name + ext for {:?}", path);
    }
}

#[test]
fn parse_win32() {
    check_parse_format(WIN32, WIN_PATHS);

    // Dialect selection, not content sniffing: a forward-slash path handed
    // to the win32 parser is still rooted.
    assert_eq!(win32::parse("/foo/bar").root, "/");
}

#[test]
fn parse_posix() {
    check_parse_format(POSIX, UNIX_PATHS);
}

#[test]
fn format_win32() {
    let cases = [
        (
            PathParts {
                dir: "some\\dir",
                ..PathParts::default()
            },
            "some\\dir\\",
        ),
        (
            PathParts {
                base: "index.html",
                ..PathParts::default()
            },
            "index.html",
        ),
        (
            PathParts {
                root: "C:\\",
                ..PathParts::default()
            },
            "C:\\",
        ),
        (
            PathParts {
                name: "index",
                ext: ".html",
                ..PathParts::default()
            },
            "index.html",
        ),
        (
            PathParts {
                dir: "some\\dir",
                name: "index",
                ext: ".html",
                ..PathParts::default()
            },
            "some\\dir\\index.html",
        ),
        (
            PathParts {
                root: "C:\\",
                name: "index",
                ext: ".html",
                ..PathParts::default()
            },
            "C:\\index.html",
        ),
        (PathParts::default(), ""),
    ];
    for &(parts, expected) in cases.iter() {
        assert_eq!(win32::format(parts), expected);
    }
}

#[test]
fn format_posix() {
    let cases = [
        (
            PathParts {
                dir: "some/dir",
                ..PathParts::default()
            },
            "some/dir/",
        ),
        (
            PathParts {
                base: "index.html",
                ..PathParts::default()
            },
            "index.html",
        ),
        (
            PathParts {
                root: "/",
                ..PathParts::default()
            },
            "/",
        ),
        (
            PathParts {
                name: "index",
                ext: ".html",
                ..PathParts::default()
            },
            "index.html",
        ),
        (
            PathParts {
                dir: "some/dir",
                name: "index",
                ext: ".html",
                ..PathParts::default()
            },
            "some/dir/index.html",
        ),
        (
            PathParts {
                root: "/",
                name: "index",
                ext: ".html",
                ..PathParts::default()
            },
            "/index.html",
        ),
        (PathParts::default(), ""),
    ];
    for &(parts, expected) in cases.iter() {
        assert_eq!(posix::format(parts), expected);
    }
}

fn pp(root: &str, dir: &str, base: &str, ext: &str, name: &str) -> ParsedPath {
    ParsedPath {
        root: root.to_string(),
        dir: dir.to_string(),
        base: base.to_string(),
        ext: ext.to_string(),
        name: name.to_string(),
    }
}

// Trailing separators belong to no component; internal redundant runs stay
// inside `dir`.
#[test]
fn parse_trailing_win32() {
    let cases = [
        (".\\", pp("", "", ".", "", ".")),
        ("\\\\", pp("\\", "\\", "", "", "")),
        ("c:\\foo\\\\\\", pp("c:\\", "c:\\", "foo", "", "foo")),
        (
            "D:\\foo\\\\\\bar.baz",
            pp("D:\\", "D:\\foo\\\\", "bar.baz", ".baz", "bar"),
        ),
    ];
    for (path, expected) in cases.iter() {
        assert_eq!(&win32::parse(path), expected, "parse of {:?}", path);
    }
}

#[test]
fn parse_trailing_posix() {
    let cases = [
        ("./", pp("", "", ".", "", ".")),
        ("//", pp("/", "/", "", "", "")),
        ("///", pp("/", "/", "", "", "")),
        ("/foo///", pp("/", "/", "foo", "", "foo")),
        (
            "/foo///bar.baz",
            pp("/", "/foo//", "bar.baz", ".baz", "bar"),
        ),
    ];
    for (path, expected) in cases.iter() {
        assert_eq!(&posix::parse(path), expected, "parse of {:?}", path);
    }
}

#[test]
fn trailing_separator_idempotence() {
    let plain = posix::parse("foo");
    let trailing = posix::parse("foo///");
    assert_eq!(plain.base, trailing.base);
    assert_eq!(plain.ext, trailing.ext);
    assert_eq!(plain.name, trailing.name);

    let plain = win32::parse("foo");
    let trailing = win32::parse("foo\\\\\\");
    assert_eq!(plain.base, trailing.base);
    assert_eq!(plain.ext, trailing.ext);
    assert_eq!(plain.name, trailing.name);
}

#[test]
fn dot_file_rule() {
    for path in &[".", "..", ".foo"] {
        assert_eq!(posix::parse(path).ext, "", "extension of {:?}", path);
        assert_eq!(win32::parse(path).ext, "", "extension of {:?}", path);
    }
    // A second dot is a real extension boundary.
    assert_eq!(posix::parse(".foo.bar").ext, ".bar");
}

#[test]
fn drive_relative_distinction() {
    let bare = win32::parse("C:");
    assert_eq!(bare.root, "C:");
    assert!(!win32::detect_root("C:").absolute);

    let rooted = win32::parse("C:\\");
    assert_eq!(rooted.root, "C:\\");
    assert!(win32::detect_root("C:\\").absolute);
}

#[test]
fn unc_root_extraction() {
    let parsed = win32::parse("\\\\server\\share\\file");
    assert_eq!(parsed.root, "\\\\server\\share\\");
    assert_eq!(parsed.base, "file");
}

#[test]
fn empty_input() {
    let parsed = posix::parse("");
    assert_eq!(parsed, ParsedPath::default());
    assert_eq!(posix::format(&parsed), "");

    let parsed = win32::parse("");
    assert_eq!(parsed, ParsedPath::default());
    assert_eq!(win32::format(&parsed), "");
}
