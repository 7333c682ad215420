// config.rs - Command line configuration and the simulation run loop

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::patterns::{self, Pattern};
use crate::render::{self, Representation};

pub const DEFAULT_GENERATIONS: i64 = 10;
pub const DEFAULT_FILE_NAME: &str = "life.txt";
pub const DEFAULT_ROWS: i64 = 10;
pub const DEFAULT_COLUMNS: i64 = 20;
pub const DEFAULT_ALIVE_CHAR: char = '*';

/// Run Conway's Game of Life on a fixed-size grid loaded from a text file.
#[derive(Parser, Debug)]
#[command(name = "conway", version, allow_negative_numbers = true)]
pub struct Args {
    /// Number of generations to simulate after generation 0.
    #[arg(default_value_t = DEFAULT_GENERATIONS)]
    pub generations: i64,

    /// Text file holding generation 0, one line per row.
    #[arg(default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// Number of rows in the grid.
    #[arg(default_value_t = DEFAULT_ROWS)]
    pub rows: i64,

    /// Number of columns in the grid.
    #[arg(default_value_t = DEFAULT_COLUMNS)]
    pub columns: i64,

    /// Character marking a live cell in the input file.
    #[arg(long, default_value_t = DEFAULT_ALIVE_CHAR)]
    pub alive_char: char,

    /// Printed for a live cell.
    #[arg(long, default_value = render::DEFAULT_ALIVE_REPRESENTATION)]
    pub alive: String,

    /// Printed for a dead cell.
    #[arg(long, default_value = render::DEFAULT_DEAD_REPRESENTATION)]
    pub dead: String,

    /// Printed after every cell.
    #[arg(long, default_value = render::DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Seed from a built-in pattern (e.g. glider, pulsar) instead of the file.
    #[arg(long)]
    pub pattern: Option<String>,
}

/// Where generation 0 comes from.
pub enum Seed {
    File { path: PathBuf, alive_char: char },
    Pattern(&'static Pattern),
}

/// Validated run configuration.
pub struct Config {
    pub generations: usize,
    pub rows: usize,
    pub columns: usize,
    pub seed: Seed,
    pub repr: Representation,
}

impl TryFrom<Args> for Config {
    type Error = LifeError;

    fn try_from(args: Args) -> Result<Self> {
        let non_negative = |value: i64| {
            usize::try_from(value).map_err(|_| {
                LifeError::Configuration(
                    "[generation] [rows] and [columns] must all be positive".to_string(),
                )
            })
        };
        let generations = non_negative(args.generations)?;
        let rows = non_negative(args.rows)?;
        let columns = non_negative(args.columns)?;

        let seed = match args.pattern {
            Some(name) => Seed::Pattern(
                patterns::find_pattern(&name).ok_or(LifeError::UnknownPattern(name))?,
            ),
            None => Seed::File { path: args.file, alive_char: args.alive_char },
        };

        Ok(Self {
            generations,
            rows,
            columns,
            seed,
            repr: Representation {
                alive: args.alive,
                dead: args.dead,
                delimiter: args.delimiter,
            },
        })
    }
}

/// Loads generation 0, then writes it and every following generation to `out`.
/// Nothing is written when the seed cannot be loaded.
pub fn run<W: Write>(config: &Config, mut out: W) -> anyhow::Result<()> {
    debug!("using generation <{}>", config.generations);
    debug!("using rows <{}>", config.rows);
    debug!("using columns <{}>", config.columns);

    let mut grid = Grid::new(false, config.rows, config.columns);
    let label = match &config.seed {
        Seed::File { path, alive_char } => {
            debug!("using file name <{}>", path.display());
            grid.parse_from_file(path, *alive_char)?;
            "Grid read from file".to_string()
        }
        Seed::Pattern(pattern) => {
            patterns::apply_pattern_centered(&mut grid, pattern);
            format!("Pattern {}", pattern.name)
        }
    };

    writeln!(out, "{label} (generation 0): ")?;
    write!(out, "{}", grid.display_with(&config.repr))?;
    for gen_index in 1..=config.generations {
        grid.iterate();
        writeln!(out, "Generation {gen_index}: ")?;
        write!(out, "{}", grid.display_with(&config.repr))?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(argv: &[&str]) -> Result<Config> {
        let args = Args::try_parse_from(std::iter::once("conway").chain(argv.iter().copied()))
            .expect("arguments should parse");
        Config::try_from(args)
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.generations, 10);
        assert_eq!((config.rows, config.columns), (10, 20));
        assert_eq!(config.repr, Representation::default());
        match config.seed {
            Seed::File { path, alive_char } => {
                assert_eq!(path, PathBuf::from("life.txt"));
                assert_eq!(alive_char, '*');
            }
            Seed::Pattern(_) => panic!("expected a file seed"),
        }
    }

    #[test]
    fn test_positional_arguments() {
        let config = config(&["3", "board.txt", "4", "5"]).unwrap();
        assert_eq!((config.generations, config.rows, config.columns), (3, 4, 5));
    }

    #[test]
    fn test_negative_values_are_configuration_errors() {
        for argv in [&["-1"][..], &["1", "f", "-2"], &["1", "f", "2", "-3"]] {
            let err = config(argv).err().expect("negative value must be rejected");
            assert!(matches!(err, LifeError::Configuration(_)), "{argv:?}");
        }
    }

    #[test]
    fn test_unknown_pattern() {
        let err = config(&["--pattern", "spaceship-9000"]).err().unwrap();
        assert!(matches!(err, LifeError::UnknownPattern(name) if name == "spaceship-9000"));
    }

    #[test]
    fn test_run_pattern_output() {
        let config = config(&["1", "unused.txt", "3", "3", "--pattern", "blinker"]).unwrap();
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let expected = concat!(
            "Pattern Blinker (generation 0): \n",
            "- - - \n",
            "* * * \n",
            "- - - \n",
            "\n",
            "Generation 1: \n",
            "- * - \n",
            "- * - \n",
            "- * - \n",
            "\n",
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_run_missing_file_writes_nothing() {
        let config = config(&["2", "no/such/life.txt"]).unwrap();
        let mut out = Vec::new();

        let err = run(&config, &mut out).unwrap_err();
        assert!(matches!(err.downcast_ref::<LifeError>(), Some(LifeError::FileAccess { .. })));
        assert!(out.is_empty());
    }
}
