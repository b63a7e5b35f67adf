// Copyright (c) The towpath Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]
#![cfg_attr(doc_cfg, feature(doc_cfg, doc_auto_cfg))]

//! Cross-platform path parsing and formatting.
//!
//! `towpath` decomposes path strings into their semantic components (root,
//! directory, base name, extension, and stem) and reassembles them, for both
//! POSIX-style and Windows-style path syntax, on any host.
//!
//! The standard library's `std::path` always applies the rules of the platform
//! the program runs on. That is the right default for code that touches the
//! local filesystem, but tools that merely *inspect* paths (build systems
//! reading Windows manifests on Linux, archivers storing member names, servers
//! logging client-supplied paths) need the rules of a *dialect* chosen at run
//! time, independent of the host. `towpath` provides exactly that: two
//! stateless [`Dialect`] values, [`POSIX`] and [`WIN32`], each exposing the
//! same purely lexical API, with matching free-function namespaces in
//! [`posix`] and [`win32`].
//!
//! Everything in this crate is string manipulation. No function touches the
//! filesystem, resolves a symlink, or checks that a path exists.
//!
//! # Examples
//!
//! Splitting a path into its components and putting it back together:
//!
//! ```
//! use towpath::posix;
//!
//! let parsed = posix::parse("/home/user/index.html");
//! assert_eq!(parsed.root, "/");
//! assert_eq!(parsed.dir, "/home/user");
//! assert_eq!(parsed.base, "index.html");
//! assert_eq!(parsed.ext, ".html");
//! assert_eq!(parsed.name, "index");
//! assert_eq!(posix::format(&parsed), "/home/user/index.html");
//! ```
//!
//! Windows syntax works the same way, including drive letters and UNC shares,
//! even on a non-Windows host:
//!
//! ```
//! use towpath::win32;
//!
//! let parsed = win32::parse(r"\\server\share\report.txt");
//! assert_eq!(parsed.root, r"\\server\share\");
//! assert_eq!(parsed.base, "report.txt");
//! ```

use std::{error, fmt, ops::Range, str::FromStr};

#[cfg(feature = "proptest1")]
mod proptest_impls;
#[cfg(test)]
mod tests;

/// The components of a path string, as produced by [`Dialect::parse`].
///
/// A `ParsedPath` is a transient, immutable computation result: it is built
/// fresh on every `parse` call, holds plain owned strings, and has no identity
/// beyond its field values. `base` is always `name` followed by `ext`.
///
/// # Examples
///
/// ```
/// use towpath::win32;
///
/// let parsed = win32::parse(r"C:\path\dir\index.html");
/// assert_eq!(parsed.root, r"C:\");
/// assert_eq!(parsed.dir, r"C:\path\dir");
/// assert_eq!(parsed.base, "index.html");
/// assert_eq!(parsed.ext, ".html");
/// assert_eq!(parsed.name, "index");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedPath {
    /// The non-relocatable prefix of the path: `"/"`, `"C:\"`,
    /// `"\\server\share\"`, or `""` for a relative path.
    pub root: String,
    /// The root plus the directory portion, with the separator that precedes
    /// the base removed (kept only when the directory *is* the root).
    pub dir: String,
    /// The final path segment. Never contains a separator.
    pub base: String,
    /// The extension of `base`, including its leading dot, or `""`. A base
    /// consisting only of dots, or a dot-file name with no further dot, has
    /// no extension.
    pub ext: String,
    /// `base` with `ext` removed from its end.
    pub name: String,
}

impl ParsedPath {
    /// Borrows the fields as a [`PathParts`], suitable for [`Dialect::format`].
    #[must_use]
    pub fn as_parts(&self) -> PathParts<'_> {
        PathParts {
            root: &self.root,
            dir: &self.dir,
            base: &self.base,
            ext: &self.ext,
            name: &self.name,
        }
    }
}

/// A borrowed, possibly partial set of path components accepted by
/// [`Dialect::format`].
///
/// Every field defaults to `""`, and an empty field is treated as absent, so
/// a `PathParts` can be built from any subset of the components with struct
/// update syntax:
///
/// ```
/// use towpath::{posix, PathParts};
///
/// let joined = posix::format(PathParts {
///     dir: "some/dir",
///     name: "index",
///     ext: ".html",
///     ..PathParts::default()
/// });
/// assert_eq!(joined, "some/dir/index.html");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathParts<'a> {
    /// Root prefix, used when `dir` is empty.
    pub root: &'a str,
    /// Directory portion; takes precedence over `root`.
    pub dir: &'a str,
    /// Final segment; takes precedence over `name` + `ext`.
    pub base: &'a str,
    /// Extension, appended to `name` when `base` is empty.
    pub ext: &'a str,
    /// Stem, used together with `ext` when `base` is empty.
    pub name: &'a str,
}

impl<'a> From<&'a ParsedPath> for PathParts<'a> {
    fn from(parsed: &'a ParsedPath) -> PathParts<'a> {
        parsed.as_parts()
    }
}

/// The root prefix reported by [`Dialect::detect_root`].
///
/// `len` is the raw byte length of the root within the input string; for a
/// POSIX path it spans the whole run of leading separators, even though the
/// parsed root is normalized to a single character.
///
/// A path can be rooted without being absolute: the Windows drive-relative
/// form `C:` has a two-byte root but `absolute == false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Root {
    /// Raw byte length of the root prefix, `0` when the path has none.
    pub len: usize,
    /// Whether the path is absolute under the dialect's rules.
    pub absolute: bool,
}

impl Root {
    /// Returns `true` if the path carries any root prefix at all.
    ///
    /// ```
    /// use towpath::win32;
    ///
    /// assert!(win32::detect_root("C:").is_rooted());
    /// assert!(!win32::detect_root("C:").absolute);
    /// assert!(win32::detect_root(r"C:\").absolute);
    /// ```
    #[must_use]
    pub fn is_rooted(&self) -> bool {
        self.len > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Flavor {
    Posix,
    Windows,
}

impl Flavor {
    fn is_sep(self, b: u8) -> bool {
        match self {
            Flavor::Posix => b == b'/',
            Flavor::Windows => is_windows_sep(b),
        }
    }
}

/// A path syntax dialect: a separator character plus a root-recognition
/// ruleset, parameterizing one shared set of lexical algorithms.
///
/// The two dialects are exposed as the process-wide constants [`POSIX`] and
/// [`WIN32`]. A `Dialect` is a plain `Copy` configuration value with no
/// per-call state, so it is freely shareable across threads.
///
/// The free-function modules [`posix`] and [`win32`] mirror every method here
/// for callers that prefer a namespaced style.
///
/// # Examples
///
/// ```
/// use towpath::{POSIX, WIN32};
///
/// assert_eq!(POSIX.separator(), '/');
/// assert_eq!(WIN32.separator(), '\\');
/// assert!(WIN32.is_absolute(r"\\server\share"));
/// assert!(!WIN32.is_absolute("C:file.txt"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dialect {
    separator: char,
    delimiter: char,
    flavor: Flavor,
}

/// The POSIX dialect: `/` separators, a leading-slash root.
pub const POSIX: Dialect = Dialect {
    separator: '/',
    delimiter: ':',
    flavor: Flavor::Posix,
};

/// The Windows dialect: `\` separators (with `/` accepted on input), drive
/// letter and UNC share roots.
pub const WIN32: Dialect = Dialect {
    separator: '\\',
    delimiter: ';',
    flavor: Flavor::Windows,
};

// ---
// Core: root detection, parse, format
// ---

impl Dialect {
    /// The dialect's canonical separator character.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// The dialect's path-list delimiter (`:` on POSIX, `;` on Windows).
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The dialect's lowercase name, `"posix"` or `"win32"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.flavor {
            Flavor::Posix => "posix",
            Flavor::Windows => "win32",
        }
    }

    /// Returns `true` if `c` separates path segments in this dialect.
    ///
    /// The Windows dialect accepts both `\` and `/`; POSIX only `/`.
    #[must_use]
    pub fn is_separator(&self, c: char) -> bool {
        match self.flavor {
            Flavor::Posix => c == '/',
            Flavor::Windows => c == '/' || c == '\\',
        }
    }

    fn is_sep(&self, b: u8) -> bool {
        self.flavor.is_sep(b)
    }

    /// Determines the length and absoluteness of the path's root prefix.
    ///
    /// Which ruleset applies is decided by the dialect alone, never by
    /// sniffing the path's content: `POSIX.detect_root` reports a POSIX root
    /// even for a string that happens to look like a Windows path, and vice
    /// versa.
    ///
    /// * POSIX: the root is the maximal run of leading `/` characters, and
    ///   any such run makes the path absolute.
    /// * Windows, in order: a UNC share (`\\host\share\`, trailing separator
    ///   included when present; device forms such as `\\?\UNC\` fall out of
    ///   the same two-segment rule), a drive (`C:\` absolute, bare `C:`
    ///   rooted but drive-relative), or a bare leading separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use towpath::{posix, win32};
    ///
    /// assert_eq!(posix::detect_root("///foo").len, 3);
    /// assert!(posix::detect_root("/foo").absolute);
    ///
    /// assert_eq!(win32::detect_root(r"\\server\share\file").len, 15);
    /// assert_eq!(win32::detect_root(r"C:\Windows").len, 3);
    /// assert_eq!(win32::detect_root("C:relative").len, 2);
    /// assert!(!win32::detect_root("C:relative").absolute);
    /// assert_eq!(win32::detect_root("file.txt").len, 0);
    /// ```
    #[must_use]
    pub fn detect_root(&self, path: &str) -> Root {
        match self.flavor {
            Flavor::Posix => {
                let len = path.bytes().take_while(|&b| b == b'/').count();
                Root {
                    len,
                    absolute: len > 0,
                }
            }
            Flavor::Windows => {
                let root = windows_root(path);
                Root {
                    len: root.len,
                    absolute: root.absolute,
                }
            }
        }
    }

    /// Returns `true` if the path is absolute under this dialect's rules.
    ///
    /// ```
    /// use towpath::{posix, win32};
    ///
    /// assert!(posix::is_absolute("/usr/bin"));
    /// assert!(!posix::is_absolute("usr/bin"));
    /// assert!(win32::is_absolute(r"C:\Windows"));
    /// assert!(!win32::is_absolute("C:Windows"));
    /// ```
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        self.detect_root(path).absolute
    }

    /// Splits a path string into its [`ParsedPath`] components.
    ///
    /// The empty string parses to all-empty fields. Trailing separators are
    /// not part of any component (`"foo///"` has the same `base` as `"foo"`),
    /// while redundant separators *inside* the path are preserved in `dir`,
    /// so that [`format`](Dialect::format) can reproduce the input exactly. A
    /// run of leading separators collapses to a single-character root on
    /// POSIX.
    ///
    /// # Examples
    ///
    /// ```
    /// use towpath::posix;
    ///
    /// let parsed = posix::parse("/foo///bar.baz");
    /// assert_eq!(parsed.root, "/");
    /// assert_eq!(parsed.dir, "/foo//");
    /// assert_eq!(parsed.base, "bar.baz");
    /// assert_eq!(parsed.ext, ".baz");
    /// assert_eq!(parsed.name, "bar");
    ///
    /// // Dot-files have no extension.
    /// assert_eq!(posix::parse("/home/user/.bashrc").ext, "");
    /// ```
    #[must_use]
    pub fn parse(&self, path: &str) -> ParsedPath {
        let mut ret = ParsedPath::default();
        if path.is_empty() {
            return ret;
        }

        let root = self.detect_root(path);
        let root_len = match self.flavor {
            Flavor::Posix => root.len.min(1),
            Flavor::Windows => root.len,
        };
        ret.root.push_str(&path[..root_len]);

        let tail = self.scan_tail(path, root_len);
        let base_start = tail.start_part.unwrap_or(root_len);
        if let Some(end) = tail.end {
            ret.base.push_str(&path[base_start..end]);
            match tail.ext_start {
                Some(dot) => {
                    ret.name.push_str(&path[base_start..dot]);
                    ret.ext.push_str(&path[dot..end]);
                }
                None => ret.name.push_str(&ret.base),
            }
        }
        ret.dir = match tail.start_part {
            Some(start_part) => path[..start_part - 1].to_string(),
            None => ret.root.clone(),
        };
        ret
    }

    /// Builds a path string from a (possibly partial) set of components.
    ///
    /// Precedence: the directory portion is `dir` if non-empty, else `root`;
    /// the file portion is `base` if non-empty, else `name` + `ext`. When
    /// both portions are present they are joined with the dialect separator,
    /// unless the directory portion is exactly the supplied `root`, which
    /// already ends with its own separator when it needs one. Field contents
    /// are not validated; `format` inverts [`parse`](Dialect::parse), it does
    /// not sanitize hand-built components.
    ///
    /// # Examples
    ///
    /// ```
    /// use towpath::{posix, PathParts};
    ///
    /// assert_eq!(posix::format(PathParts::default()), "");
    /// assert_eq!(
    ///     posix::format(PathParts { base: "index.html", ..PathParts::default() }),
    ///     "index.html",
    /// );
    /// assert_eq!(
    ///     posix::format(PathParts { root: "/", name: "index", ext: ".html", ..PathParts::default() }),
    ///     "/index.html",
    /// );
    /// ```
    #[must_use]
    pub fn format<'a>(&self, parts: impl Into<PathParts<'a>>) -> String {
        let parts = parts.into();
        let dir = if parts.dir.is_empty() {
            parts.root
        } else {
            parts.dir
        };
        let mut out = String::new();
        if !dir.is_empty() {
            out.push_str(dir);
            if dir != parts.root {
                out.push(self.separator);
            }
        }
        if parts.base.is_empty() {
            out.push_str(parts.name);
            out.push_str(parts.ext);
        } else {
            out.push_str(parts.base);
        }
        out
    }

    /// Backward scan shared by `parse` and `extname`: locates the last
    /// meaningful segment and the dot that starts its extension, ignoring
    /// trailing separators.
    fn scan_tail(&self, path: &str, scan_start: usize) -> Tail {
        let bytes = path.as_bytes();
        let mut start_dot: Option<usize> = None;
        let mut start_part: Option<usize> = None;
        let mut end: Option<usize> = None;
        let mut matched_slash = true;
        // What the scan has seen since recording the dot: 0 = nothing yet,
        // 1 = another dot, -1 = a regular character.
        let mut pre_dot_state = 0i8;

        let mut i = bytes.len();
        while i > scan_start {
            i -= 1;
            let code = bytes[i];
            if self.is_sep(code) {
                if !matched_slash {
                    start_part = Some(i + 1);
                    break;
                }
                continue;
            }
            if end.is_none() {
                matched_slash = false;
                end = Some(i + 1);
            }
            if code == b'.' {
                match start_dot {
                    None => start_dot = Some(i),
                    Some(_) if pre_dot_state != 1 => pre_dot_state = 1,
                    Some(_) => {}
                }
            } else if start_dot.is_some() {
                pre_dot_state = -1;
            }
        }

        let base_start = start_part.unwrap_or(scan_start);
        let ext_start = match (start_dot, end) {
            (Some(dot), Some(end)) => {
                // A name that is nothing but dots (`.`, `..`) carries no
                // extension; neither does a lone leading-dot name.
                let dots_only = pre_dot_state == 0
                    || (pre_dot_state == 1 && dot == end - 1 && dot == base_start + 1);
                if dots_only {
                    None
                } else {
                    Some(dot)
                }
            }
            _ => None,
        };
        Tail {
            start_part,
            end,
            ext_start,
        }
    }
}

struct Tail {
    /// Index one past the separator that closes the directory portion, if
    /// the scan reached one.
    start_part: Option<usize>,
    /// One past the last byte of the final segment, trailing separators
    /// excluded. `None` when the scanned range is empty or all separators.
    end: Option<usize>,
    /// Start of the extension within the final segment, if it has one.
    ext_start: Option<usize>,
}

// ---
// Derived operations
// ---

impl Dialect {
    /// Returns the directory portion of the path, like [`parse`] but without
    /// building the full component set.
    ///
    /// Consistent with `parse`: whenever `parse(path).dir` is non-empty it
    /// equals `dirname(path)`.
    ///
    /// ```
    /// use towpath::{posix, win32};
    ///
    /// assert_eq!(posix::dirname("/foo/bar/baz.txt"), "/foo/bar");
    /// assert_eq!(posix::dirname("foo"), ".");
    /// assert_eq!(posix::dirname("/"), "/");
    /// assert_eq!(win32::dirname(r"C:\foo\bar"), r"C:\foo");
    /// assert_eq!(win32::dirname(r"\\server\share\file"), r"\\server\share\");
    /// ```
    ///
    /// [`parse`]: Dialect::parse
    #[must_use]
    pub fn dirname<'a>(&self, path: &'a str) -> &'a str {
        match self.flavor {
            Flavor::Posix => dirname_posix(path),
            Flavor::Windows => dirname_windows(path),
        }
    }

    /// Returns the final segment of the path, ignoring trailing separators.
    ///
    /// ```
    /// use towpath::posix;
    ///
    /// assert_eq!(posix::basename("/foo/bar/quux.html"), "quux.html");
    /// assert_eq!(posix::basename("/foo/bar///"), "bar");
    /// assert_eq!(posix::basename("/"), "");
    /// ```
    #[must_use]
    pub fn basename<'a>(&self, path: &'a str) -> &'a str {
        let bytes = path.as_bytes();
        let skip = match self.flavor {
            Flavor::Windows if has_drive_prefix(bytes) => 2,
            _ => 0,
        };
        let mut start = skip;
        let mut end: Option<usize> = None;
        let mut matched_slash = true;
        let mut i = bytes.len();
        while i > skip {
            i -= 1;
            if self.is_sep(bytes[i]) {
                if !matched_slash {
                    start = i + 1;
                    break;
                }
            } else if end.is_none() {
                matched_slash = false;
                end = Some(i + 1);
            }
        }
        match end {
            Some(end) => &path[start..end],
            None => "",
        }
    }

    /// Returns the extension of the path's final segment, including the
    /// leading dot, or `""`.
    ///
    /// ```
    /// use towpath::posix;
    ///
    /// assert_eq!(posix::extname("index.coffee.md"), ".md");
    /// assert_eq!(posix::extname("index."), ".");
    /// assert_eq!(posix::extname("index"), "");
    /// assert_eq!(posix::extname(".bashrc"), "");
    /// ```
    #[must_use]
    pub fn extname<'a>(&self, path: &'a str) -> &'a str {
        let skip = match self.flavor {
            Flavor::Windows if has_drive_prefix(path.as_bytes()) => 2,
            _ => 0,
        };
        let tail = self.scan_tail(path, skip);
        match (tail.ext_start, tail.end) {
            (Some(dot), Some(end)) => &path[dot..end],
            _ => "",
        }
    }

    /// Lexically normalizes the path, resolving `.` and `..` segments and
    /// collapsing separator runs. A trailing separator is preserved.
    ///
    /// ```
    /// use towpath::{posix, win32};
    ///
    /// assert_eq!(posix::normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
    /// assert_eq!(posix::normalize("./foo/"), "foo/");
    /// assert_eq!(posix::normalize(""), ".");
    /// assert_eq!(win32::normalize(r"C:\temp\\foo\bar\..\"), r"C:\temp\foo\");
    /// assert_eq!(win32::normalize("//server/share/dir/file.ext"), r"\\server\share\dir\file.ext");
    /// ```
    #[must_use]
    pub fn normalize(&self, path: &str) -> String {
        match self.flavor {
            Flavor::Posix => normalize_posix(path),
            Flavor::Windows => normalize_windows(path),
        }
    }

    /// Joins the given segments with the dialect separator and normalizes
    /// the result. Empty segments are skipped; no segments at all yield `"."`.
    ///
    /// ```
    /// use towpath::posix;
    ///
    /// assert_eq!(posix::join(&["/foo", "bar", "baz/asdf", "quux", ".."]), "/foo/bar/baz/asdf");
    /// assert_eq!(posix::join(&["", ""]), ".");
    /// ```
    #[must_use]
    pub fn join<I>(&self, parts: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        match self.flavor {
            Flavor::Posix => {
                let mut joined = String::new();
                for part in parts {
                    let part = part.as_ref();
                    if part.is_empty() {
                        continue;
                    }
                    if !joined.is_empty() {
                        joined.push('/');
                    }
                    joined.push_str(part);
                }
                if joined.is_empty() {
                    return ".".to_string();
                }
                self.normalize(&joined)
            }
            Flavor::Windows => join_windows(self, parts),
        }
    }

    /// Resolves the segments right to left until an absolute anchor is found,
    /// then normalizes, mirroring shell `cd` semantics lexically.
    ///
    /// This crate never performs I/O, so no working directory is consulted:
    /// when no segment is absolute the result is simply a normalized relative
    /// path (`"."` when nothing remains). Callers that want the traditional
    /// behavior can pass their own base as the first segment.
    ///
    /// On Windows, drive and UNC anchors are tracked across segments and
    /// matched ASCII-case-insensitively.
    ///
    /// ```
    /// use towpath::{posix, win32};
    ///
    /// assert_eq!(posix::resolve(&["/foo/bar", "./baz"]), "/foo/bar/baz");
    /// assert_eq!(posix::resolve(&["/foo/bar", "/tmp/file"]), "/tmp/file");
    /// assert_eq!(posix::resolve(&["a", "b"]), "a/b");
    /// assert_eq!(win32::resolve(&[r"C:\a", "b"]), r"C:\a\b");
    /// ```
    #[must_use]
    pub fn resolve<I>(&self, parts: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let parts: Vec<I::Item> = parts.into_iter().collect();
        match self.flavor {
            Flavor::Posix => {
                let mut resolved = String::new();
                let mut absolute = false;
                for part in parts.iter().rev() {
                    let path = part.as_ref();
                    if path.is_empty() {
                        continue;
                    }
                    resolved = format!("{}/{}", path, resolved);
                    absolute = path.as_bytes()[0] == b'/';
                    if absolute {
                        break;
                    }
                }
                let resolved = normalize_string(&resolved, !absolute, '/', Flavor::Posix);
                if absolute {
                    format!("/{}", resolved)
                } else if resolved.is_empty() {
                    ".".to_string()
                } else {
                    resolved
                }
            }
            Flavor::Windows => resolve_windows(&parts),
        }
    }

    /// Computes the relative path from `from` to `to`.
    ///
    /// Both arguments are passed through [`resolve`](Dialect::resolve) first;
    /// relative inputs are compared against a shared virtual root, so purely
    /// relative pairs still produce meaningful `..` chains. Windows
    /// comparison is ASCII-case-insensitive, and two paths on different
    /// drives have no relative path between them (`to` is returned resolved).
    ///
    /// ```
    /// use towpath::{posix, win32};
    ///
    /// assert_eq!(posix::relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb"), "../../impl/bbb");
    /// assert_eq!(posix::relative("/foo/bar", "/foo/bar/baz"), "baz");
    /// assert_eq!(
    ///     win32::relative(r"C:\orandea\test\aaa", r"C:\orandea\impl\bbb"),
    ///     r"..\..\impl\bbb",
    /// );
    /// ```
    #[must_use]
    pub fn relative(&self, from: &str, to: &str) -> String {
        match self.flavor {
            Flavor::Posix => relative_posix(self, from, to),
            Flavor::Windows => relative_windows(self, from, to),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---
// Dialect selection by name
// ---

impl FromStr for Dialect {
    type Err = DialectNameError;

    fn from_str(s: &str) -> Result<Dialect, DialectNameError> {
        match s {
            "posix" => Ok(POSIX),
            "win32" => Ok(WIN32),
            _ => Err(DialectNameError {
                name: s.to_string(),
            }),
        }
    }
}

/// The error returned when parsing a [`Dialect`] from an unrecognized name.
///
/// Produced by the `FromStr` implementation for [`Dialect`]; the only
/// recognized names are `"posix"` and `"win32"`.
///
/// # Examples
///
/// ```
/// use towpath::{Dialect, DialectNameError};
///
/// let err: DialectNameError = "vms".parse::<Dialect>().expect_err("unknown dialect failed");
/// assert_eq!(err.name(), "vms");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DialectNameError {
    name: String,
}

impl DialectNameError {
    /// Returns the name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DialectNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unrecognized path dialect: {:?}", self.name)
    }
}

impl error::Error for DialectNameError {}

// ---
// Windows root recognition
// ---

fn is_windows_sep(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

fn has_drive_prefix(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Breakdown of a Windows root prefix, shared by the parser and the derived
/// operations.
struct WindowsRoot {
    /// Byte length of the root as it appears in a parsed path, including the
    /// separator that follows a drive or share when one is present.
    len: usize,
    absolute: bool,
    kind: WindowsRootKind,
}

enum WindowsRootKind {
    /// No recognizable root.
    None,
    /// A bare leading separator with no drive or share.
    Separator,
    /// `C:` or `C:\`.
    Drive,
    /// `\\host\share`; byte ranges of the host and share segments.
    Share {
        host: Range<usize>,
        share: Range<usize>,
    },
}

impl WindowsRoot {
    /// The device prefix (`C:` or a canonicalized `\\host\share`), or `""`.
    fn device(&self, path: &str) -> String {
        match &self.kind {
            WindowsRootKind::Drive => path[..2].to_string(),
            WindowsRootKind::Share { host, share } => {
                format!("\\\\{}\\{}", &path[host.clone()], &path[share.clone()])
            }
            _ => String::new(),
        }
    }

    /// Where the relative tail begins for `normalize`/`resolve`: past the
    /// device but before the separator that follows it.
    fn tail_start(&self) -> usize {
        match &self.kind {
            WindowsRootKind::None => 0,
            WindowsRootKind::Separator => 1,
            WindowsRootKind::Drive => {
                if self.absolute {
                    3
                } else {
                    2
                }
            }
            WindowsRootKind::Share { share, .. } => share.end,
        }
    }
}

fn windows_root(path: &str) -> WindowsRoot {
    let bytes = path.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return WindowsRoot {
            len: 0,
            absolute: false,
            kind: WindowsRootKind::None,
        };
    }
    if is_windows_sep(bytes[0]) {
        if len > 1 && is_windows_sep(bytes[1]) {
            // Possible UNC root: two separators, a host segment, a
            // separator, a share segment.
            let mut j = 2;
            let host_start = j;
            while j < len && !is_windows_sep(bytes[j]) {
                j += 1;
            }
            if j < len && j != host_start {
                let host = host_start..j;
                while j < len && is_windows_sep(bytes[j]) {
                    j += 1;
                }
                let share_start = j;
                if j < len && j != host.end {
                    while j < len && !is_windows_sep(bytes[j]) {
                        j += 1;
                    }
                    if j == len {
                        // `\\host\share` with nothing after it.
                        return WindowsRoot {
                            len: j,
                            absolute: true,
                            kind: WindowsRootKind::Share {
                                host,
                                share: share_start..j,
                            },
                        };
                    }
                    if j != share_start {
                        // Include the separator that closes the share.
                        return WindowsRoot {
                            len: j + 1,
                            absolute: true,
                            kind: WindowsRootKind::Share {
                                host,
                                share: share_start..j,
                            },
                        };
                    }
                }
            }
        }
        return WindowsRoot {
            len: 1,
            absolute: true,
            kind: WindowsRootKind::Separator,
        };
    }
    if has_drive_prefix(bytes) {
        if len > 2 && is_windows_sep(bytes[2]) {
            return WindowsRoot {
                len: 3,
                absolute: true,
                kind: WindowsRootKind::Drive,
            };
        }
        return WindowsRoot {
            len: 2,
            absolute: false,
            kind: WindowsRootKind::Drive,
        };
    }
    WindowsRoot {
        len: 0,
        absolute: false,
        kind: WindowsRootKind::None,
    }
}

// ---
// Derived operation internals
// ---

fn dirname_posix(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let bytes = path.as_bytes();
    let has_root = bytes[0] == b'/';
    let mut end: Option<usize> = None;
    let mut matched_slash = true;
    let mut i = bytes.len();
    while i > 1 {
        i -= 1;
        if bytes[i] == b'/' {
            if !matched_slash {
                end = Some(i);
                break;
            }
        } else {
            matched_slash = false;
        }
    }
    match end {
        None => {
            if has_root {
                "/"
            } else {
                "."
            }
        }
        // `//x` keeps both leading separators as its directory.
        Some(1) if has_root => "//",
        Some(end) => &path[..end],
    }
}

fn dirname_windows(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let bytes = path.as_bytes();
    let root = windows_root(path);
    if root.len == bytes.len() && root.len > 0 {
        // The path is nothing but a root (`\`, `C:`, `C:\`, `\\host\share`).
        return path;
    }
    let mut end: Option<usize> = None;
    let mut matched_slash = true;
    let mut i = bytes.len();
    while i > root.len {
        i -= 1;
        if is_windows_sep(bytes[i]) {
            if !matched_slash {
                end = Some(i);
                break;
            }
        } else {
            matched_slash = false;
        }
    }
    match end {
        Some(end) => &path[..end],
        None => {
            if root.len == 0 {
                "."
            } else {
                &path[..root.len]
            }
        }
    }
}

fn normalize_posix(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let bytes = path.as_bytes();
    let absolute = bytes[0] == b'/';
    let trailing = bytes[bytes.len() - 1] == b'/';
    let mut normalized = normalize_string(path, !absolute, '/', Flavor::Posix);
    if normalized.is_empty() {
        if absolute {
            return "/".to_string();
        }
        return if trailing { "./" } else { "." }.to_string();
    }
    if trailing {
        normalized.push('/');
    }
    if absolute {
        format!("/{}", normalized)
    } else {
        normalized
    }
}

fn normalize_windows(path: &str) -> String {
    let bytes = path.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return ".".to_string();
    }
    if len == 1 {
        return if bytes[0] == b'/' {
            "\\".to_string()
        } else {
            path.to_string()
        };
    }
    let root = windows_root(path);
    if let WindowsRootKind::Share { host, share } = &root.kind {
        if share.end == len {
            // A bare share is already a root; canonicalize and keep it one.
            return format!("\\\\{}\\{}\\", &path[host.clone()], &path[share.clone()]);
        }
    }
    let device = root.device(path);
    let tail_start = root.tail_start();
    let mut tail = if tail_start < len {
        normalize_string(&path[tail_start..], !root.absolute, '\\', Flavor::Windows)
    } else {
        String::new()
    };
    if tail.is_empty() && !root.absolute {
        tail.push('.');
    }
    if !tail.is_empty() && is_windows_sep(bytes[len - 1]) {
        tail.push('\\');
    }
    if device.is_empty() {
        if root.absolute {
            format!("\\{}", tail)
        } else {
            tail
        }
    } else if root.absolute {
        format!("{}\\{}", device, tail)
    } else {
        format!("{}{}", device, tail)
    }
}

fn join_windows<I>(dialect: &Dialect, parts: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    let mut first_len = 0;
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if joined.is_empty() {
            first_len = part.len();
        } else {
            joined.push('\\');
        }
        joined.push_str(part);
    }
    if joined.is_empty() {
        return ".".to_string();
    }

    // A UNC root must come from the first segment alone; separator doubling
    // produced by the join itself is collapsed back to a single separator so
    // that normalize does not mistake it for a share.
    let first = &joined.as_bytes()[..first_len];
    let mut needs_replace = true;
    let mut slash_count = 0;
    if is_windows_sep(first[0]) {
        slash_count += 1;
        if first_len > 1 && is_windows_sep(first[1]) {
            slash_count += 1;
            if first_len > 2 {
                if is_windows_sep(first[2]) {
                    slash_count += 1;
                } else {
                    needs_replace = false;
                }
            }
        }
    }
    if needs_replace {
        let count = {
            let bytes = joined.as_bytes();
            let mut count = slash_count;
            while count < bytes.len() && is_windows_sep(bytes[count]) {
                count += 1;
            }
            count
        };
        if count >= 2 {
            joined = format!("\\{}", &joined[count..]);
        }
    }
    dialect.normalize(&joined)
}

fn resolve_windows<S: AsRef<str>>(parts: &[S]) -> String {
    let mut resolved_device = String::new();
    let mut resolved_tail = String::new();
    let mut resolved_absolute = false;

    for part in parts.iter().rev() {
        let path = part.as_ref();
        if path.is_empty() {
            continue;
        }
        let root = windows_root(path);
        let device = root.device(path);

        if !device.is_empty() {
            if resolved_device.is_empty() {
                resolved_device = device;
            } else if !device.eq_ignore_ascii_case(&resolved_device) {
                // A segment anchored on another device cannot contribute.
                continue;
            }
        }

        if resolved_absolute {
            if !resolved_device.is_empty() {
                break;
            }
        } else {
            resolved_tail = format!("{}\\{}", &path[root.tail_start()..], resolved_tail);
            resolved_absolute = root.absolute;
            if resolved_absolute && !resolved_device.is_empty() {
                break;
            }
        }
    }

    let resolved_tail = normalize_string(&resolved_tail, !resolved_absolute, '\\', Flavor::Windows);
    if resolved_absolute {
        format!("{}\\{}", resolved_device, resolved_tail)
    } else {
        let out = format!("{}{}", resolved_device, resolved_tail);
        if out.is_empty() {
            ".".to_string()
        } else {
            out
        }
    }
}

fn relative_posix(dialect: &Dialect, from: &str, to: &str) -> String {
    if from == to {
        return String::new();
    }
    let from = dialect.resolve(&[from]);
    let to = dialect.resolve(&[to]);
    if from == to {
        return String::new();
    }
    // Anchor relative results at a virtual root so both sides share one.
    let from = anchor_posix(from);
    let to = anchor_posix(to);
    if from == to {
        return String::new();
    }

    let from_b = from.as_bytes();
    let to_b = to.as_bytes();
    let from_start = 1;
    let from_end = from_b.len();
    let from_len = from_end - from_start;
    let to_start = 1;
    let to_end = to_b.len();
    let to_len = to_end - to_start;

    // Find the longest common prefix, tracked at separator boundaries.
    let length = from_len.min(to_len);
    let mut last_common_sep: Option<usize> = None;
    let mut i = 0;
    while i < length {
        let code = from_b[from_start + i];
        if code != to_b[to_start + i] {
            break;
        }
        if code == b'/' {
            last_common_sep = Some(i);
        }
        i += 1;
    }
    if i == length {
        if to_len > length {
            if to_b[to_start + i] == b'/' {
                // `from` is an exact base directory of `to`.
                return to[to_start + i + 1..].to_string();
            }
            if i == 0 {
                // `from` is the root.
                return to[to_start + i..].to_string();
            }
        } else if from_len > length {
            if from_b[from_start + i] == b'/' {
                last_common_sep = Some(i);
            } else if i == 0 {
                last_common_sep = Some(0);
            }
        }
    }

    // One `..` per segment of `from` past the common prefix.
    let mut out = String::new();
    let mut i = from_start + last_common_sep.map_or(0, |sep| sep + 1);
    while i <= from_end {
        if i == from_end || from_b[i] == b'/' {
            out.push_str(if out.is_empty() { ".." } else { "/.." });
        }
        i += 1;
    }

    let suffix_start = match last_common_sep {
        Some(sep) => to_start + sep,
        None => to_start - 1,
    };
    format!("{}{}", out, &to[suffix_start..])
}

fn relative_windows(dialect: &Dialect, from: &str, to: &str) -> String {
    if from == to {
        return String::new();
    }
    let from_orig = anchor_windows(dialect.resolve(&[from]));
    let to_orig = anchor_windows(dialect.resolve(&[to]));
    if from_orig == to_orig {
        return String::new();
    }
    let from_lower = from_orig.to_ascii_lowercase();
    let to_lower = to_orig.to_ascii_lowercase();
    if from_lower == to_lower {
        return String::new();
    }
    let from_b = from_lower.as_bytes();
    let to_b = to_lower.as_bytes();
    let on_device = !windows_root(&from_orig).device(&from_orig).is_empty()
        || !windows_root(&to_orig).device(&to_orig).is_empty();

    // Trim leading separators, plus trailing separators (UNC roots).
    let mut from_start = 0;
    while from_start < from_b.len() && from_b[from_start] == b'\\' {
        from_start += 1;
    }
    let mut from_end = from_b.len();
    while from_end > from_start + 1 && from_b[from_end - 1] == b'\\' {
        from_end -= 1;
    }
    let from_len = from_end.saturating_sub(from_start);

    let mut to_start = 0;
    while to_start < to_b.len() && to_b[to_start] == b'\\' {
        to_start += 1;
    }
    let mut to_end = to_b.len();
    while to_end > to_start + 1 && to_b[to_end - 1] == b'\\' {
        to_end -= 1;
    }
    let to_len = to_end.saturating_sub(to_start);

    // Find the longest common prefix, case-insensitively.
    let length = from_len.min(to_len);
    let mut last_common_sep: Option<usize> = None;
    let mut i = 0;
    while i < length {
        let code = from_b[from_start + i];
        if code != to_b[to_start + i] {
            break;
        }
        if code == b'\\' {
            last_common_sep = Some(i);
        }
        i += 1;
    }

    if i != length {
        if last_common_sep.is_none() && on_device {
            // Nothing in common at all, e.g. two different drives.
            return to_orig;
        }
    } else {
        if to_len > length {
            if to_b[to_start + i] == b'\\' {
                // `from` is an exact base directory of `to`.
                return to_orig[to_start + i + 1..].to_string();
            }
            if i == 2 && on_device {
                // `from` is a bare drive root.
                return to_orig[to_start + i..].to_string();
            }
        }
        if from_len > length {
            if from_b[from_start + i] == b'\\' {
                last_common_sep = Some(i);
            } else if i == 2 && on_device {
                last_common_sep = Some(3);
            }
        }
        if last_common_sep.is_none() && i == 0 && to_len > 0 {
            // `from` is the bare virtual root.
            return to_orig[to_start..to_end].to_string();
        }
    }

    // One `..` per segment of `from` past the common prefix.
    let mut out = String::new();
    let mut i = from_start + last_common_sep.map_or(0, |sep| sep + 1);
    while i <= from_end {
        if i == from_end || from_b[i] == b'\\' {
            out.push_str(if out.is_empty() { ".." } else { "\\.." });
        }
        i += 1;
    }

    let suffix_start = match last_common_sep {
        Some(sep) => (to_start + sep).min(to_end),
        None => to_start.saturating_sub(1),
    };
    if !out.is_empty() {
        let suffix = if to_len == 0 {
            ""
        } else {
            &to_orig[suffix_start..to_end]
        };
        return format!("{}{}", out, suffix);
    }
    let mut suffix_start = suffix_start;
    if to_b.get(suffix_start) == Some(&b'\\') {
        suffix_start += 1;
    }
    to_orig[suffix_start.min(to_end)..to_end].to_string()
}

fn anchor_posix(path: String) -> String {
    if path.as_bytes().first() == Some(&b'/') {
        path
    } else if path == "." {
        "/".to_string()
    } else {
        format!("/{}", path)
    }
}

fn anchor_windows(path: String) -> String {
    if path == "." {
        return "\\".to_string();
    }
    if windows_root(&path).len > 0 {
        path
    } else {
        format!("\\{}", path)
    }
}

/// Resolves `.` and `..` segments and collapses separator runs in a rootless
/// path fragment. `allow_above_root` keeps `..` segments that would climb out
/// of the fragment instead of dropping them.
fn normalize_string(path: &str, allow_above_root: bool, separator: char, flavor: Flavor) -> String {
    let bytes = path.as_bytes();
    let mut res = String::new();
    let mut last_segment_length = 0;
    let mut last_slash: isize = -1;
    let mut dots: i32 = 0;
    let mut code = 0u8;
    let mut i = 0;
    while i <= bytes.len() {
        if i < bytes.len() {
            code = bytes[i];
        } else if flavor.is_sep(code) {
            break;
        } else {
            code = b'/';
        }

        if flavor.is_sep(code) {
            if last_slash == i as isize - 1 || dots == 1 {
                // Empty or `.` segment, nothing to emit.
            } else if dots == 2 {
                if res.len() < 2 || last_segment_length != 2 || !res.ends_with("..") {
                    if res.len() > 2 {
                        match res.rfind(separator) {
                            None => {
                                res.clear();
                                last_segment_length = 0;
                            }
                            Some(idx) => {
                                res.truncate(idx);
                                last_segment_length =
                                    res.len() - res.rfind(separator).map_or(0, |s| s + 1);
                            }
                        }
                        last_slash = i as isize;
                        dots = 0;
                        i += 1;
                        continue;
                    } else if !res.is_empty() {
                        res.clear();
                        last_segment_length = 0;
                        last_slash = i as isize;
                        dots = 0;
                        i += 1;
                        continue;
                    }
                }
                if allow_above_root {
                    if !res.is_empty() {
                        res.push(separator);
                    }
                    res.push_str("..");
                    last_segment_length = 2;
                }
            } else {
                let segment = &path[(last_slash + 1) as usize..i];
                if !res.is_empty() {
                    res.push(separator);
                }
                res.push_str(segment);
                last_segment_length = segment.len();
            }
            last_slash = i as isize;
            dots = 0;
        } else if code == b'.' && dots != -1 {
            dots += 1;
        } else {
            dots = -1;
        }
        i += 1;
    }
    res
}

// ---
// Per-dialect namespaces
// ---

/// The POSIX dialect as a namespace of free functions.
///
/// Every function delegates to the [`POSIX`](crate::POSIX) constant; see
/// [`Dialect`](crate::Dialect) for the full documentation.
pub mod posix {
    use crate::{ParsedPath, PathParts, Root, POSIX};

    /// The POSIX path separator.
    pub const SEPARATOR: char = '/';
    /// The POSIX path-list delimiter.
    pub const DELIMITER: char = ':';

    /// Splits a path into its components. See [`Dialect::parse`](crate::Dialect::parse).
    #[must_use]
    pub fn parse(path: &str) -> ParsedPath {
        POSIX.parse(path)
    }

    /// Builds a path from components. See [`Dialect::format`](crate::Dialect::format).
    #[must_use]
    pub fn format<'a>(parts: impl Into<PathParts<'a>>) -> String {
        POSIX.format(parts)
    }

    /// Reports the root prefix. See [`Dialect::detect_root`](crate::Dialect::detect_root).
    #[must_use]
    pub fn detect_root(path: &str) -> Root {
        POSIX.detect_root(path)
    }

    /// Returns `true` if the path starts with `/`.
    #[must_use]
    pub fn is_absolute(path: &str) -> bool {
        POSIX.is_absolute(path)
    }

    /// Returns the directory portion of the path.
    #[must_use]
    pub fn dirname(path: &str) -> &str {
        POSIX.dirname(path)
    }

    /// Returns the final segment of the path.
    #[must_use]
    pub fn basename(path: &str) -> &str {
        POSIX.basename(path)
    }

    /// Returns the extension of the final segment, or `""`.
    #[must_use]
    pub fn extname(path: &str) -> &str {
        POSIX.extname(path)
    }

    /// Lexically normalizes the path.
    #[must_use]
    pub fn normalize(path: &str) -> String {
        POSIX.normalize(path)
    }

    /// Joins segments and normalizes the result.
    #[must_use]
    pub fn join<I>(parts: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        POSIX.join(parts)
    }

    /// Resolves segments right to left. See [`Dialect::resolve`](crate::Dialect::resolve).
    #[must_use]
    pub fn resolve<I>(parts: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        POSIX.resolve(parts)
    }

    /// Computes the relative path from `from` to `to`.
    #[must_use]
    pub fn relative(from: &str, to: &str) -> String {
        POSIX.relative(from, to)
    }
}

/// The Windows dialect as a namespace of free functions.
///
/// Every function delegates to the [`WIN32`](crate::WIN32) constant; see
/// [`Dialect`](crate::Dialect) for the full documentation.
pub mod win32 {
    use crate::{ParsedPath, PathParts, Root, WIN32};

    /// The Windows path separator.
    pub const SEPARATOR: char = '\\';
    /// The Windows path-list delimiter.
    pub const DELIMITER: char = ';';

    /// Splits a path into its components. See [`Dialect::parse`](crate::Dialect::parse).
    #[must_use]
    pub fn parse(path: &str) -> ParsedPath {
        WIN32.parse(path)
    }

    /// Builds a path from components. See [`Dialect::format`](crate::Dialect::format).
    #[must_use]
    pub fn format<'a>(parts: impl Into<PathParts<'a>>) -> String {
        WIN32.format(parts)
    }

    /// Reports the root prefix. See [`Dialect::detect_root`](crate::Dialect::detect_root).
    #[must_use]
    pub fn detect_root(path: &str) -> Root {
        WIN32.detect_root(path)
    }

    /// Returns `true` if the path is absolute (`C:\`, `\\host\share`, or a
    /// leading separator).
    #[must_use]
    pub fn is_absolute(path: &str) -> bool {
        WIN32.is_absolute(path)
    }

    /// Returns the directory portion of the path.
    #[must_use]
    pub fn dirname(path: &str) -> &str {
        WIN32.dirname(path)
    }

    /// Returns the final segment of the path.
    #[must_use]
    pub fn basename(path: &str) -> &str {
        WIN32.basename(path)
    }

    /// Returns the extension of the final segment, or `""`.
    #[must_use]
    pub fn extname(path: &str) -> &str {
        WIN32.extname(path)
    }

    /// Lexically normalizes the path.
    #[must_use]
    pub fn normalize(path: &str) -> String {
        WIN32.normalize(path)
    }

    /// Joins segments and normalizes the result.
    #[must_use]
    pub fn join<I>(parts: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        WIN32.join(parts)
    }

    /// Resolves segments right to left. See [`Dialect::resolve`](crate::Dialect::resolve).
    #[must_use]
    pub fn resolve<I>(parts: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        WIN32.resolve(parts)
    }

    /// Computes the relative path from `from` to `to`.
    #[must_use]
    pub fn relative(from: &str, to: &str) -> String {
        WIN32.relative(from, to)
    }
}
