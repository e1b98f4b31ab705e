use std::path::PathBuf;

use strtab_core::StringTable;

use super::input::load_lines;

pub struct EncodeArgs {
    pub file: Option<PathBuf>,
}

pub fn run(args: EncodeArgs) {
    let lines = match load_lines(args.file.as_deref()) {
        Ok(lines) => lines,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let mut table = StringTable::new();
    for line in &lines {
        match table.add(line) {
            Ok(id) => println!("{}", id.as_u32()),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
