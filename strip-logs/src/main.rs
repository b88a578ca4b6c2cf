use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use console::style;
use std::fs;
use std::path::PathBuf;

mod strip;

#[derive(Parser, Debug)]
#[command(
    name = "strip-logs",
    about = "Strip console.log statements from a source file, in place",
    long_about = "
Log Stripper

Removes console.log(...) statements from a source file and rewrites it in
place. Calls spanning multiple lines are handled by balancing parentheses,
so formatted or wrapped arguments are removed cleanly. Only the literal
console.log( prefix is matched; console.error, console.warn and similar are
left alone.

Example Usage:
  strip-logs src/app.ts"
)]
struct Args {
    /// Source file to rewrite in place
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> Result<()> {
    // A wrong argument count exits with status 1, not clap's default 2
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read '{}'", args.file.display()))?;

    let (stripped, removed) = strip::remove_console_logs(&content);

    fs::write(&args.file, stripped)
        .with_context(|| format!("Failed to write '{}'", args.file.display()))?;

    println!(
        "{} Removed {} console.log statement{} from {}",
        style("✓").green().bold(),
        style(removed).bold(),
        if removed == 1 { "" } else { "s" },
        args.file.display()
    );

    Ok(())
}
