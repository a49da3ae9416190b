use name_sorter::comp::METHOD_NAMES;
use name_sorter::logging;
use name_sorter::prelude::*;
use std::env;
use std::io;
use std::path::PathBuf;

pub mod args;
use crate::args::ArgSpec;

fn main() {
    match inner_main(env::args().collect()) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            if e.is_notice() {
                println!("{}", e);
                std::process::exit(0);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

fn inner_main(argv: Vec<String>) -> Result<()> {
    let prog = args::ProgSpec::new(
        "Sort names by last name, then given names. Print them, and save them to a file.",
    );
    const A: [ArgSpec; 5] = [
        arg! {"output", "o", "File", "Write the sorted names here. Default sorted-names-list.txt"},
        arg_enum! {"method", "m", "Method", "How to compare names. Default collate", METHOD_NAMES},
        arg! {"reverse", "r", "", "Reverse the order"},
        arg! {"quiet", "q", "", "Only write the output file"},
        arg! {"log-level", "", "Filter", "Diagnostics to standard error, e.g. debug. Default warn"},
    ];
    let Some((args, files)) = args::parse(&prog, &A, &argv)? else {
        return Ok(());
    };
    if files.len() != 1 {
        return Err(Error::Usage(args::USAGE.to_string()));
    }

    let mut config = SortConfig::new(&files[0]);
    let mut method = String::new();
    let mut reverse = false;
    let mut level = "warn".to_string();
    for x in args {
        if x.name == "output" {
            config.output = PathBuf::from(x.value);
        } else if x.name == "method" {
            method = x.value;
        } else if x.name == "reverse" {
            reverse = true;
        } else if x.name == "quiet" {
            config.echo = false;
        } else if x.name == "log-level" {
            level = x.value;
        } else {
            unreachable!();
        }
    }
    if reverse {
        method += ",rev";
    }
    config.method = method;
    logging::init(&level)?;

    let mut w = io::stdout().lock();
    config.run(&mut w)?;
    Ok(())
}
