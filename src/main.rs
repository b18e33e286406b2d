//! ProfitRider main entrypoint.

use profitrider::run;
use profitrider::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
