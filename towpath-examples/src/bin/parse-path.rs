// Copyright (c) The towpath Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use towpath::Dialect;

/// This example shows how a [`Dialect`] can be selected with `clap`'s
/// derive-based argument parsing: `Dialect` implements `FromStr`, so an
/// unrecognized `--dialect` value is rejected at the boundary of the program.
///
/// To run this example, run
/// `cargo run --package towpath-examples --bin parse-path -- --dialect win32 'C:\temp\report.txt'`.
#[derive(Parser)]
#[clap(rename_all = "kebab-case")]
struct Opt {
    /// Path to decompose
    path: String,

    /// Path dialect to parse with ("posix" or "win32")
    #[clap(long, default_value = "posix")]
    dialect: Dialect,
}

pub fn main() {
    // Parse the arguments.
    let opt = Opt::parse();

    // Print the path's components.
    let parsed = opt.dialect.parse(&opt.path);
    println!("dialect: {}", opt.dialect);
    println!("root:    {:?}", parsed.root);
    println!("dir:     {:?}", parsed.dir);
    println!("base:    {:?}", parsed.base);
    println!("ext:     {:?}", parsed.ext);
    println!("name:    {:?}", parsed.name);
}
