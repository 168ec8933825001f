//! rBuoniPasto main entrypoint.

use rbuonipasto::run;
use rbuonipasto::ui;

fn main() {
    if let Err(e) = run() {
        ui::messages::error(&e);
        std::process::exit(2);
    }
}
