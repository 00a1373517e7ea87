use anyhow::{Context, bail};
use sweeper_core::{Button, Coord};

pub const HELP: &str = "\
Commands (0-based coordinates):
  r ROW COL  reveal a cell
  f ROW COL  toggle a flag
  h          show this help
  q          quit";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Click(Coord, Coord, Button),
    Help,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Empty);
        };

        let button = match verb.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Ok(Self::Quit),
            "h" | "help" => return Ok(Self::Help),
            "r" | "reveal" => Button::Left,
            "f" | "flag" => Button::Right,
            other => bail!("Unknown command '{other}', type 'h' for help"),
        };

        let row = parse_coord(words.next(), "row")?;
        let col = parse_coord(words.next(), "column")?;
        if words.next().is_some() {
            bail!("Usage: {verb} ROW COL");
        }
        Ok(Self::Click(row, col, button))
    }
}

fn parse_coord(word: Option<&str>, name: &str) -> anyhow::Result<Coord> {
    let word = word.with_context(|| format!("Missing {name}"))?;
    word.parse()
        .with_context(|| format!("Invalid {name} '{word}'"))
}
