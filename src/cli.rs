use lexopt::{Arg, Parser};
use std::path::PathBuf;

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cli {
    Run(RunArgs),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct RunArgs {
    /// Configuration file given with `--config`
    pub(crate) config: Option<PathBuf>,

    /// File to write log messages to, given with `--log`
    pub(crate) log: Option<PathBuf>,
}

impl Cli {
    pub(crate) const USAGE: &'static str = concat!(
        "Usage: gridsnake [options]\n",
        "\n",
        "Options:\n",
        "  -c, --config FILE   Read configuration from FILE\n",
        "      --log FILE      Write log messages to FILE\n",
        "  -h, --help          Show this help message and exit\n",
        "  -V, --version       Show the program version and exit\n",
        "\n",
        "Keys: arrows / WASD / hjkl to steer, r to restart, q or Esc to quit\n",
    );

    pub(crate) fn from_env() -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = RunArgs::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log") => args.log = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}
