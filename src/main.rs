//! knockdown CLI - render AI-generated Markdown to HTML
//!
//! Usage: `knockdown [--raw-html] [FILE | -]`

use std::io::{self, Read, Write};
use std::process::ExitCode;

use knockdown::Options;

const USAGE: &str = "\
Usage: knockdown [--raw-html] [FILE | -]

Renders Markdown from FILE (or stdin when FILE is `-` or absent) to HTML.

Options:
  --raw-html   pass HTML found in the input through unescaped
  -h, --help   print this message
";

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Render { options: Options, path: Option<String> },
    Help,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut options = Options::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--raw-html" => options.escape_html = false,
            "-h" | "--help" => return Ok(Command::Help),
            "-" => path = None,
            s if s.starts_with('-') => return Err(format!("unknown option `{s}`")),
            _ => path = Some(arg),
        }
    }

    Ok(Command::Render { options, path })
}

fn render(options: &Options, path: Option<String>) -> io::Result<()> {
    // Read from the named file, or stdin
    let input = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = knockdown::to_html_with_options(&input, options);
    io::stdout().write_all(html.as_bytes())
}

fn main() -> ExitCode {
    match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Command::Render { options, path }) => match render(&options, path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("knockdown: {err}");
                ExitCode::FAILURE
            }
        },
        Err(msg) => {
            eprint!("knockdown: {msg}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_defaults_to_stdin_with_escaping() {
        assert_eq!(
            parse(&[]),
            Ok(Command::Render {
                options: Options::default(),
                path: None
            })
        );
    }

    #[test]
    fn test_raw_html_and_path() {
        assert_eq!(
            parse(&["--raw-html", "notes.md"]),
            Ok(Command::Render {
                options: Options { escape_html: false },
                path: Some("notes.md".into())
            })
        );
    }

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(
            parse(&["notes.md", "-"]),
            Ok(Command::Render {
                options: Options::default(),
                path: None
            })
        );
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert_eq!(parse(&["--raw"]), Err("unknown option `--raw`".into()));
        assert!(parse(&["--escape-html", "notes.md"]).is_err());
        assert!(parse(&["-x"]).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["--help"]), Ok(Command::Help));
        assert_eq!(parse(&["-h", "--bogus"]), Ok(Command::Help));
    }
}
