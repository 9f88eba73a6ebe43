//! rasreport main entrypoint.

use rasreport::run;
use rasreport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(e.exit_code());
    }
}
