use std::path::PathBuf;

use strtab_core::{KeyOrder, StringTable};

use super::input::load_lines;
use crate::cli::OrderChoice;

pub struct TableArgs {
    pub file: Option<PathBuf>,
    pub order: OrderChoice,
    pub renumber: bool,
}

pub fn run(args: TableArgs) {
    let lines = match load_lines(args.file.as_deref()) {
        Ok(lines) => lines,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let mut table = StringTable::new();
    for line in &lines {
        if let Err(e) = table.add(line) {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    if args.renumber {
        table.renumber();
    }

    let order = match args.order {
        OrderChoice::Text => KeyOrder::Text,
        OrderChoice::Id => KeyOrder::Id,
    };

    println!("{} distinct strings", table.len());
    table.walk(order, |record| {
        println!(
            "id={} refs={} text='{}'",
            record.id().as_u32(),
            record.ref_count(),
            record.text()
        );
    });
}
