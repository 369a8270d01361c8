use std::process::ExitCode;

use flattener::cli;
use flattener::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = cli::parse();
    match app::run(args) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            ExitCode::from(app::RunStatus::Failed.exit_code())
        }
    }
}
