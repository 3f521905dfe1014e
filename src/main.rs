use cmpsh::error::print_error;
use cmpsh::flags::Flags;
use cmpsh::shell::Shell;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if flags.parse(&args).is_err() {
        print_error();
        return ExitCode::FAILURE;
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("cmpsh {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let result = Shell::new(&flags).and_then(|mut shell| shell.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if flags.is_set("debug") {
                eprintln!("cmpsh: debug: {}", e);
            }
            print_error();
            ExitCode::FAILURE
        }
    }
}
