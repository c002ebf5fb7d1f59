use std::fs::OpenOptions;
use std::io;
use std::io::Write;

use chrono::Local;

// Appends one line per invocation: local timestamp, the argv as typed,
// and an optional free-form comment.
pub fn append(logname: &str, comment: Option<&str>) -> io::Result<()>{
    let mut log = OpenOptions::new().create(true).append(true).open(logname)?;
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let argv: Vec<String> = std::env::args().collect();
    match comment{
        Some(text) => writeln!(log, "[{}] {} # {}", timestamp, argv.join(" "), text),
        None => writeln!(log, "[{}] {}", timestamp, argv.join(" ")),
    }
}
