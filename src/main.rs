mod config;
mod error;
mod help;
mod sounds_dir;
mod dialog {
    pub mod system_file_chooser;
}
use config::Config;
use dialog::system_file_chooser::{DialogRequest, pick_sound_file};
use error::{Error, Result};

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, PartialEq, Eq)]
enum Args {
    Help,
    Pick { dir: Option<PathBuf> },
}

fn parse_args(args: &[OsString]) -> Result<Args> {
    // Everything after `--` is positional, even if it starts with `-`.
    let (options, trailing) = match args.iter().position(|a| a == "--") {
        Some(split) => (&args[..split], &args[split + 1..]),
        None => (args, &args[..0]),
    };
    if options.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(Args::Help);
    }
    if let Some(flag) = options.iter().find(|a| a.as_encoded_bytes().starts_with(b"-")) {
        return Err(Error::UnexpectedArgument(flag.to_string_lossy().into_owned()));
    }

    let mut positional = options.iter().chain(trailing);
    let dir = positional.next().map(PathBuf::from);
    if let Some(extra) = positional.next() {
        return Err(Error::UnexpectedArgument(extra.to_string_lossy().into_owned()));
    }
    Ok(Args::Pick { dir })
}

#[derive(Debug)]
enum Outcome {
    Help,
    Picked(PathBuf),
    Cancelled,
}

fn exit_status(outcome: &Result<Outcome>) -> u8 {
    match outcome {
        Ok(Outcome::Help | Outcome::Picked(_)) => 0,
        Ok(Outcome::Cancelled) => 1,
        Err(_) => 2,
    }
}

/// CLI argument first, then the config override, then `<exe dir>/sounds`.
fn resolve_sounds_dir(cli_dir: Option<PathBuf>, cfg: &Config) -> Result<PathBuf> {
    match cli_dir.or_else(|| cfg.sounds_dir.clone()) {
        Some(dir) => Ok(dir),
        None => sounds_dir::default_sounds_dir(),
    }
}

fn run(cli_dir: Option<PathBuf>) -> Result<Outcome> {
    let cfg = Config::load();
    let dir = resolve_sounds_dir(cli_dir, &cfg)?;
    log::debug!("Sounds directory: {}", dir.display());
    let dir = sounds_dir::ensure_dir(&dir)?;

    let request = DialogRequest::from_config(&cfg, dir);
    Ok(match pick_sound_file(&request) {
        Some(path) => Outcome::Picked(path),
        None => Outcome::Cancelled,
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let outcome = parse_args(&args).and_then(|args| match args {
        Args::Help => {
            help::print_help();
            Ok(Outcome::Help)
        }
        Args::Pick { dir } => run(dir),
    });

    match &outcome {
        Ok(Outcome::Picked(path)) => println!("{}", path.display()),
        Ok(Outcome::Cancelled) => log::info!("Dialog cancelled"),
        Ok(Outcome::Help) => {}
        Err(err) => {
            log::error!("{err}");
            eprintln!("sound-picker: {err}");
        }
    }
    ExitCode::from(exit_status(&outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn no_args_picks_from_default_dir() {
        assert_eq!(parse_args(&[]).unwrap(), Args::Pick { dir: None });
    }

    #[test]
    fn help_flag_wins_anywhere() {
        assert_eq!(parse_args(&strings(&["-h"])).unwrap(), Args::Help);
        assert_eq!(parse_args(&strings(&["/tmp", "--help"])).unwrap(), Args::Help);
    }

    #[test]
    fn positional_dir_is_override() {
        assert_eq!(
            parse_args(&strings(&["/srv/sounds"])).unwrap(),
            Args::Pick { dir: Some(PathBuf::from("/srv/sounds")) }
        );
    }

    #[test]
    fn unknown_flag_and_extra_args_are_rejected() {
        let err = parse_args(&strings(&["--verbose"])).unwrap_err();
        assert!(matches!(err, Error::UnexpectedArgument(a) if a == "--verbose"));
        let err = parse_args(&strings(&["/a", "/b"])).unwrap_err();
        assert!(matches!(err, Error::UnexpectedArgument(a) if a == "/b"));
    }

    #[test]
    fn double_dash_allows_dir_starting_with_dash() {
        assert_eq!(
            parse_args(&strings(&["--", "-samples"])).unwrap(),
            Args::Pick { dir: Some(PathBuf::from("-samples")) }
        );
        assert_eq!(
            parse_args(&strings(&["/srv", "--"])).unwrap(),
            Args::Pick { dir: Some(PathBuf::from("/srv")) }
        );
        // `--help` after the separator is a directory name, not a flag.
        assert_eq!(
            parse_args(&strings(&["--", "--help"])).unwrap(),
            Args::Pick { dir: Some(PathBuf::from("--help")) }
        );
        let err = parse_args(&strings(&["/a", "--", "/b"])).unwrap_err();
        assert!(matches!(err, Error::UnexpectedArgument(a) if a == "/b"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_dir_is_accepted() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"/tmp/\xff".to_vec());
        assert_eq!(
            parse_args(&[raw.clone()]).unwrap(),
            Args::Pick { dir: Some(PathBuf::from(raw)) }
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_flag_is_reported_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let err = parse_args(&[OsString::from_vec(b"-\xff".to_vec())]).unwrap_err();
        assert!(matches!(err, Error::UnexpectedArgument(a) if a == "-\u{fffd}"));
    }

    #[test]
    fn exit_status_follows_outcome() {
        assert_eq!(exit_status(&Ok(Outcome::Picked(PathBuf::from("/s/beep.wav")))), 0);
        assert_eq!(exit_status(&Ok(Outcome::Help)), 0);
        assert_eq!(exit_status(&Ok(Outcome::Cancelled)), 1);
        let err = Error::MissingSoundsDir(PathBuf::from("/nope"));
        assert_eq!(exit_status(&Err(err)), 2);
    }

    #[test]
    fn bad_arguments_exit_with_error_status() {
        let outcome = parse_args(&strings(&["--verbose"])).map(|_| Outcome::Help);
        assert_eq!(exit_status(&outcome), 2);
    }

    #[test]
    fn missing_dir_exits_with_error_status() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(exit_status(&run(Some(tmp.path().join("sounds")))), 2);
    }

    #[test]
    fn cli_dir_beats_config_dir() {
        let cfg = Config { sounds_dir: Some(PathBuf::from("/from/config")), ..Config::default() };
        let dir = resolve_sounds_dir(Some(PathBuf::from("/from/cli")), &cfg).unwrap();
        assert_eq!(dir, PathBuf::from("/from/cli"));
        assert_eq!(resolve_sounds_dir(None, &cfg).unwrap(), PathBuf::from("/from/config"));
    }

    #[test]
    fn default_dir_is_next_to_executable() {
        let exe = env::current_exe().unwrap();
        let exe = exe.canonicalize().unwrap_or(exe);
        let dir = resolve_sounds_dir(None, &Config::default()).unwrap();
        assert_eq!(dir, exe.parent().unwrap().join("sounds"));
    }

    #[test]
    fn run_fails_on_missing_dir_before_opening_dialog() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("sounds");
        let err = run(Some(missing.clone())).unwrap_err();
        assert!(matches!(err, Error::MissingSoundsDir(p) if p == missing));
    }
}
