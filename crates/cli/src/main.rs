use anyhow::Result;
use clap::Parser;

use gildedrose_cli::{Args, DAYS_ENV, LOG_FORMAT_ENV, run};
use gildedrose_inventory::{Inventory, standard_stock};

fn main() -> Result<()> {
    match std::env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => gildedrose_observability::init_json(),
        _ => gildedrose_observability::init(),
    }

    let options = Args::parse().into_options(std::env::var(DAYS_ENV).ok());

    let stdout = std::io::stdout();
    run(Inventory::new(standard_stock()), options, &mut stdout.lock())
}
