//! Line input loading shared by the commands.

use std::io::Read;
use std::path::Path;

/// Read all input lines from a file, or stdin when no path is given.
pub fn load_lines(path: Option<&Path>) -> Result<Vec<String>, String> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            buf
        }
    };

    Ok(text.lines().map(str::to_owned).collect())
}
