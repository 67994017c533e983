//! Command-line argument parser.
//!
//! Turns the arguments after the program name into a `Command` the
//! binary's `main` dispatches on.

/// A parsed command-line request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every registered system with its slug.
    List,

    /// Print a system's rules: `describe <name|slug>`.
    Describe { system: String },

    /// Score one game file: `score <name|slug> <game.json>`.
    Score { system: String, path: String },

    /// Score one game file under every system: `score-all <game.json>`.
    ScoreAll { path: String },

    /// Score the built-in sample endings: `samples <name|slug>`.
    Samples { system: String },

    /// Print usage.
    Help,
}

pub const USAGE: &str = "\
Usage: palmerston <COMMAND>

Commands:
  list                          List scoring systems and their slugs
  describe <system>             Show how a system scores a game
  score <system> <game.json>    Score a game, printing JSON
  score-all <game.json>         Score a game under every system
  samples <system>              Score the built-in sample games
  help                          Show this message

<system> is either the exact system name or its slug.";

/// Parses command-line arguments, excluding the program name.
///
/// Returns `None` for an unknown command or missing arguments. A system
/// name containing spaces may be given as several arguments.
pub fn parse_args(args: &[String]) -> Option<Command> {
    let (first, rest) = args.split_first()?;
    match first.as_str() {
        "list" if rest.is_empty() => Some(Command::List),
        "help" | "--help" | "-h" => Some(Command::Help),
        "describe" => Some(Command::Describe {
            system: join_name(rest)?,
        }),
        "samples" => Some(Command::Samples {
            system: join_name(rest)?,
        }),
        "score" => {
            let (path, name) = rest.split_last()?;
            Some(Command::Score {
                system: join_name(name)?,
                path: path.clone(),
            })
        }
        "score-all" => match rest {
            [path] => Some(Command::ScoreAll { path: path.clone() }),
            _ => None,
        },
        _ => None,
    }
}

fn join_name(words: &[String]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn parse_list() {
        assert_eq!(parse_args(&args("list")), Some(Command::List));
        assert_eq!(parse_args(&args("list extra")), None);
    }

    #[test]
    fn parse_help() {
        assert_eq!(parse_args(&args("--help")), Some(Command::Help));
    }

    #[test]
    fn parse_describe_multi_word_name() {
        assert_eq!(
            parse_args(&args("describe Carnage with dead equal")),
            Some(Command::Describe {
                system: "Carnage with dead equal".to_string()
            })
        );
    }

    #[test]
    fn parse_score() {
        assert_eq!(
            parse_args(&args("score cdiplo-100 game.json")),
            Some(Command::Score {
                system: "cdiplo-100".to_string(),
                path: "game.json".to_string()
            })
        );
        assert_eq!(parse_args(&args("score game.json")), None);
    }

    #[test]
    fn parse_score_all() {
        assert_eq!(
            parse_args(&args("score-all game.json")),
            Some(Command::ScoreAll {
                path: "game.json".to_string()
            })
        );
        assert_eq!(parse_args(&args("score-all")), None);
    }

    #[test]
    fn parse_samples() {
        assert_eq!(
            parse_args(&args("samples OMG")),
            Some(Command::Samples {
                system: "OMG".to_string()
            })
        );
    }

    #[test]
    fn parse_empty_and_unknown() {
        assert_eq!(parse_args(&[]), None);
        assert_eq!(parse_args(&args("foobar")), None);
        assert_eq!(parse_args(&args("describe")), None);
    }
}
