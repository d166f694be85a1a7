//! hudoor main entrypoint.

use hudoor::run;

fn main() {
    if let Err(e) = run() {
        hudoor::ui::messages::error(e);
        std::process::exit(1);
    }
}
