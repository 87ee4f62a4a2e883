use finman::{cli::run_cli, init};

fn main() {
    init();

    if let Err(err) = run_cli(None) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
