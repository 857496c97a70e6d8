use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use termtables::{cells, defaults, Alignment, Cell, CellStyle, Table, Value};

fn main() {
    let log_file = File::create("termtables-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    defaults::enable_utf8_per_locale();

    let mut table = Table::new();
    table.add_title("Exchange rates");
    table.add_headers(["Currency", "Code", "Per USD"]);
    table.add_row(cells!["Euro", "EUR", 0.9213]);
    table.add_row(cells!["Pound sterling", "GBP", 0.7871]);
    table.add_row(cells!["Japanese yen", "JPY", 149.5]);
    table.add_separator();
    table.add_row(cells![
        Cell::styled("Unknown rate", CellStyle::new().span(2)),
        Value::Null,
    ]);
    table.set_column_alignment(Alignment::Right, &[3]);

    println!("{table}");

    table.set_mode_markdown();
    println!("{table}");

    table.set_mode_html();
    println!("{table}");
}
