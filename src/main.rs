#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    env_logger::init();

    let result = if std::env::args_os().count() <= 1 {
        image_control::ui::run(Vec::new())
    } else {
        image_control::run_cli()
    };

    if let Err(error) = result {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
