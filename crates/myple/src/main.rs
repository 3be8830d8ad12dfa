use std::process::ExitCode;

fn main() -> ExitCode {
    myple::cli::execute()
}
