pub mod cli;
pub mod dialog;
pub mod dispatch;
pub mod dom;
pub mod fetch;
pub mod session;
pub mod transform;
pub mod ui;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
