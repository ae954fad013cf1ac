use std::{env, path::PathBuf, process::ExitCode};

use tsconfig_find::{log::color, FindOptions, JsConfigMode, Resolver};

// cargo run -- tests/fixtures/parallel/a/index.js --parallel
// cargo run -- tests/fixtures/nested/src/deep/x.ts --root tests/fixtures/nested/src

fn usage() -> ExitCode {
    eprintln!("usage: tsconfig-find <file> [--jsconfig | --parallel] [--root <dir>]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let mut filename = None;
    let mut options = FindOptions::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--jsconfig" => options.jsconfig = JsConfigMode::Sequential,
            "--parallel" => options.jsconfig = JsConfigMode::Parallel,
            "--root" => match args.next() {
                Some(root) => options.root = Some(PathBuf::from(root)),
                None => return usage(),
            },
            _ if filename.is_none() => filename = Some(PathBuf::from(&arg)),
            _ => return usage(),
        }
    }
    let Some(filename) = filename else {
        return usage();
    };

    let resolver = Resolver::new(options);
    match resolver.find(&filename) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", color::red(&err));
            ExitCode::FAILURE
        }
    }
}
