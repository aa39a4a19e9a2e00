use std::process::ExitCode;
use tasker::commands::Cli;
use tasker::msg_error;

#[tokio::main]
async fn main() -> ExitCode {
    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
