use crate::config::{Config, ConfigError};
use crate::game::{Grid, GridError};
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) static HELP: &str = concat!(
    "Usage: gridsnake [<options>]\n",
    "\n",
    "Play Snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <PATH>   Read configuration from the given file\n",
    "      --width <CELLS>   Width of the playing field\n",
    "      --height <CELLS>  Height of the playing field\n",
    "  -h, --help            Display this help message and exit\n",
    "  -V, --version         Show the program version and exit\n",
);

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Mode {
    Run(Arguments),
    Help,
    Version,
}

impl Mode {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("width") => args.width = Some(parser.value()?.parse()?),
                Arg::Long("height") => args.height = Some(parser.value()?.parse()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    config: Option<PathBuf>,
    width: Option<u16>,
    height: Option<u16>,
}

impl Arguments {
    /// Load the configuration file given on the command line, or else the
    /// default configuration file if it exists
    pub(crate) fn load_config(&self) -> Result<Config, ConfigError> {
        match self.config {
            Some(ref path) => Config::load(path, false),
            None => Config::load(&Config::default_path()?, true),
        }
    }

    /// Determine the grid size, with command-line values taking precedence
    /// over the configuration
    pub(crate) fn grid(&self, config: &Config) -> Result<Grid, GridError> {
        Grid::new(
            self.width.unwrap_or(config.grid.width),
            self.height.unwrap_or(config.grid.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Mode, lexopt::Error> {
        Mode::from_parser(Parser::from_iter(
            std::iter::once("gridsnake").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Mode::Run(Arguments::default()));
    }

    #[rstest]
    #[case(&["-h"])]
    #[case(&["--help"])]
    #[case(&["--width", "10", "--help"])]
    fn help(#[case] args: &[&str]) {
        assert_eq!(parse(args).unwrap(), Mode::Help);
    }

    #[rstest]
    #[case(&["-V"])]
    #[case(&["--version"])]
    fn version(#[case] args: &[&str]) {
        assert_eq!(parse(args).unwrap(), Mode::Version);
    }

    #[test]
    fn all_options() {
        assert_eq!(
            parse(&["-c", "snake.toml", "--width=20", "--height", "8"]).unwrap(),
            Mode::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                width: Some(20),
                height: Some(8),
            })
        );
    }

    #[rstest]
    #[case(&["--width", "wide"])]
    #[case(&["--height", "-3"])]
    #[case(&["--speed", "3"])]
    #[case(&["extra"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn grid_overrides() {
        let config = Config::default();
        let args = Arguments {
            width: Some(12),
            ..Arguments::default()
        };
        let grid = args.grid(&config).unwrap();
        assert_eq!(grid.width(), 12);
        assert_eq!(grid.height(), config.grid.height);
    }
}
