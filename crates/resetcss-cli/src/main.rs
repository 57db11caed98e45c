use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(name = "resetcss")]
#[command(about = "resetcss — generates a reset stylesheet for the tags an HTML document uses")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a reset stylesheet from an HTML document
    Build {
        /// Input HTML file
        path: String,

        /// Directory the stylesheet is written to
        #[arg(long, default_value = "output")]
        out_dir: String,
    },

    /// List the distinct tags found in an HTML document
    Tags {
        /// Input HTML file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { path, out_dir } => cmd_build(&path, &out_dir),
        Command::Tags { path } => cmd_tags(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

/// Filename-safe local timestamp, asctime-style with spaces and colons
/// replaced (e.g. `Fri_Aug_29_14-03-22_2026`).
fn timestamp() -> String {
    chrono::Local::now().format("%a_%b_%d_%H-%M-%S_%Y").to_string()
}

fn cmd_build(path: &str, out_dir: &str) {
    let source = read_source(path);

    let tags = resetcss_scan::scan(&source);
    eprintln!("Loaded {path}: {} distinct tags.", tags.len());

    let css = resetcss_gen::generate(&tags);

    let dir = Path::new(out_dir);
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Error creating {out_dir}: {e}");
        std::process::exit(1);
    }

    let out_path = dir.join(format!("reset_{}.css", timestamp()));
    if let Err(e) = std::fs::write(&out_path, &css) {
        eprintln!("Error writing {}: {e}", out_path.display());
        std::process::exit(1);
    }

    eprintln!("Wrote: {}", out_path.display());
}

fn cmd_tags(path: &str) {
    let source = read_source(path);

    let tags = resetcss_scan::scan(&source);
    for tag in tags.sorted() {
        println!("{tag}");
    }
}
