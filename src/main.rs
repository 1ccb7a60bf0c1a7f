//! packmybag main entrypoint.

use packmybag::run;

fn main() {
    if let Err(e) = run() {
        packmybag::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
