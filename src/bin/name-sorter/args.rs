//! Command line description and parsing

use clap::error::ErrorKind;
use clap::ArgAction;
use name_sorter::prelude::*;

/// shown for any malformed command line
pub const USAGE: &str = "Usage: name-sorter <file-path>";

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, values: &[] }
    };
}

#[macro_export]
macro_rules! arg_enum {
    ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, values: $e }
    };
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub version: &'static str,
}

impl ProgSpec {
    pub const fn new(help: &'static str) -> Self {
        Self { help, version: env!("CARGO_PKG_VERSION") }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
    pub values: &'static [&'static str],
}

#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, value: &str, index: usize) -> Self {
        Self { name: name.to_string(), value: value.to_string(), index }
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec) -> clap::Command {
    let mut b = clap::Arg::new(x.name);
    if let Some(c) = x.short.chars().next() {
        b = b.short(c);
    }
    b = b.long(x.name).help(x.help);
    if x.value.is_empty() {
        b = b.action(ArgAction::Append).num_args(0).default_missing_value("present");
    } else {
        b = b.value_name(x.value).action(ArgAction::Append);
    }
    if !x.values.is_empty() {
        b = b.value_parser(clap::builder::PossibleValuesParser::new(x.values.iter().copied()));
    }
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    let (Some(arg), Some(ind)) = (m.get_many::<String>(x.name), m.indices_of(x.name)) else {
        return;
    };
    for (val, i) in arg.zip(ind) {
        v.push(ArgValue::new(x.name, val, i));
    }
}

/// Parse the command line into (options in command line order, positional arguments).
/// None means help or version was requested, and has been printed.
pub fn parse(
    prog: &ProgSpec,
    spec: &[ArgSpec],
    argv: &[String],
) -> Result<Option<(Vec<ArgValue>, Vec<String>)>> {
    let mut a = clap::Command::new("name-sorter")
        .version(prog.version)
        .about(prog.help)
        .after_help(CompMaker::help())
        .override_usage("name-sorter [OPTIONS] <file-path>");
    for x in spec {
        a = add_arg(a, x);
    }
    a = a.arg(clap::Arg::new("input_files").value_name("file-path").action(ArgAction::Append));

    let m = match a.try_get_matches_from(argv) {
        Ok(m) => m,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(None);
        }
        Err(_) => return Err(Error::Usage(USAGE.to_string())),
    };
    let mut v: Vec<ArgValue> = Vec::new();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    let files: Vec<String> = match m.get_many::<String>("input_files") {
        Some(arg) => arg.cloned().collect(),
        None => Vec::new(),
    };
    v.sort_by(|a, b| a.index.cmp(&b.index));
    Ok(Some((v, files)))
}
