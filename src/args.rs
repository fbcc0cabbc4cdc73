use lexopt::{Arg, Parser};
use std::path::PathBuf;

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Arguments {
    /// Play the game, reading configuration from `config` if given, else from
    /// the default configuration file
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Arguments {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config })
    }

    pub(crate) fn from_env() -> Result<Arguments, lexopt::Error> {
        Arguments::from_parser(Parser::from_env())
    }
}

pub(crate) const USAGE: &str = concat!(
    "Usage: snake-arcade [-c|--config <path>]\n",
    "\n",
    "Guide the snake to the food with the arrow keys (or hjkl or wasd).\n",
    "Don't hit the walls or yourself.  Press q, Esc, or Ctrl-C to quit.\n",
    "\n",
    "Options:\n",
    "  -c, --config <path>  Read configuration from the given file\n",
    "  -h, --help           Show this help and exit\n",
    "  -V, --version        Show the program version and exit\n",
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn no_args() {
        let parser = Parser::from_args(Vec::<String>::new());
        assert_eq!(
            Arguments::from_parser(parser).ok(),
            Some(Arguments::Run { config: None })
        );
    }

    #[rstest]
    #[case(&["-c", "foo.toml"], Arguments::Run { config: Some(PathBuf::from("foo.toml")) })]
    #[case(&["--config", "foo.toml"], Arguments::Run { config: Some(PathBuf::from("foo.toml")) })]
    #[case(&["--config=foo.toml"], Arguments::Run { config: Some(PathBuf::from("foo.toml")) })]
    #[case(&["-h"], Arguments::Help)]
    #[case(&["--help"], Arguments::Help)]
    #[case(&["-c", "foo.toml", "--help"], Arguments::Help)]
    #[case(&["-V"], Arguments::Version)]
    #[case(&["--version"], Arguments::Version)]
    fn test_parse(#[case] args: &[&str], #[case] r: Arguments) {
        let parser = Parser::from_args(args.iter().copied());
        assert_eq!(Arguments::from_parser(parser).ok(), Some(r));
    }

    #[rstest]
    #[case(&["--bogus"])]
    #[case(&["-x"])]
    #[case(&["foo"])]
    #[case(&["--config"])]
    fn test_parse_error(#[case] args: &[&str]) {
        let parser = Parser::from_args(args.iter().copied());
        assert!(Arguments::from_parser(parser).is_err());
    }
}
