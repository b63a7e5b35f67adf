// Copyright (c) The towpath Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [proptest::Arbitrary](Arbitrary) implementation for `ParsedPath`. The
//! strategy builds a POSIX-dialect path out of randomly generated segments
//! and parses it, so every generated value upholds the parser's invariants
//! (`base == name + ext`, `root` is a prefix of `dir`, and so on).

// NOTE: #[cfg(feature = "proptest1")] is specified here to work with `doc_cfg`.

use crate::{ParsedPath, POSIX};
use proptest::prelude::*;

/// The [`Arbitrary`] impl for `ParsedPath` generates a path with between 0
/// and 8 segments joined by the POSIX separator, absolute half of the time,
/// and parses it with [`POSIX`]. (Each segment is drawn from a separator-free
/// alphabet, so segment count and component boundaries are exact.)
#[cfg(feature = "proptest1")]
impl Arbitrary for ParsedPath {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (
            any::<bool>(),
            prop::collection::vec("[a-z0-9 ._-]{1,8}", 0..8),
        )
            .prop_map(|(absolute, segments)| {
                let mut path = String::new();
                if absolute {
                    path.push('/');
                }
                path.push_str(&segments.join("/"));
                POSIX.parse(&path)
            })
            .boxed()
    }
}
