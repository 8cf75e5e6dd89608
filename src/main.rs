//! prlint CLI entrypoint: checks a pull request description against the
//! required template and reports the outcome through the exit status.

use std::io;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    cli::logging::init();

    let outcome = cli::check::run().await;
    let mut stdout = io::stdout().lock();
    match outcome {
        Ok(report) => {
            if cli::output::write_success(&mut stdout, &report).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            let _ignored = cli::output::write_failure(&mut stdout, &error);
            ExitCode::FAILURE
        }
    }
}
