//! The command line tool `name-sorter` reads a file of personal names, one per line,
//! and sorts them by last name, then by given names.
//! Comparison is done with Unicode collation, so accented and non-ascii letters
//! sort where a reader would expect them.
//! The library does all of the work, the binary only parses the command line.

#![warn(
    absolute_paths_not_starting_with_crate,
    explicit_outlives_requirements,
    keyword_idents,
    noop_method_call,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_numeric_casts,
    trivial_casts,
    unreachable_pub,
    unused_lifetimes,
    unused_extern_crates,
    unused_qualifications,

//    clippy::all,
//    clippy::restriction,
//    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]

pub mod comp;
pub mod logging;
pub mod name;
pub mod prelude;
pub mod sort;
pub mod util;
