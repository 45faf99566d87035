use std::path::Path;

use crate::config::Config;
use crate::resolve_sounds_dir;

pub fn print_help() {
    print!("{}", render_help(&Config::load(), &Config::path()));
}

fn render_help(cfg: &Config, config_path: &Path) -> String {
    let sounds_dir = match resolve_sounds_dir(None, cfg) {
        Ok(dir) => dir.display().to_string(),
        Err(err) => format!("<unresolved: {err}>"),
    };
    format!(
        "sound-picker - choose a file from the sounds directory

Usage:
  sound-picker [[--] dir]       Pick a file (default dir: <exe dir>/sounds)
  sound-picker -h | --help      Show this help message

Exit status:
  0  a file was chosen and its path printed
  1  the dialog was cancelled
  2  an error occurred

Sounds directory:
  {sounds_dir}

Config:
  {}
",
        config_path.display()
    )
}
