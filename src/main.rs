use std::process::ExitCode;

fn main() -> ExitCode {
    folder_creator_lib::run()
}
