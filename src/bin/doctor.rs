use std::process::ExitCode;

fn main() -> ExitCode {
    if cv_renderer::doctor::run() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
