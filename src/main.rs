use std::process::ExitCode;

fn main() -> ExitCode {
    match medsum_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("medsum: {e}");
            ExitCode::FAILURE
        }
    }
}
