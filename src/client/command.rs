use super::state::Filter;

pub const HELP: &str = "\
commands:
  add <title>        add a movie
  search [query]     show titles containing query
  filter <kind>      all | watched | unwatched
  toggle <id>        flip watched
  delete <id>        remove a movie
  show <id>          open details
  close              close details
  reload             fetch the list again
  help               this text
  quit               exit";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Add(String),
    Search(String),
    Filter(Filter),
    Toggle(i32),
    Delete(i32),
    Show(i32),
    Close,
    Reload,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "add" | "a" => Ok(Command::Add(rest.to_string())),
            "search" | "s" | "/" => Ok(Command::Search(rest.to_string())),
            "filter" | "f" => rest.parse().map(Command::Filter),
            "toggle" | "t" => id(rest).map(Command::Toggle),
            "delete" | "rm" | "d" => id(rest).map(Command::Delete),
            "show" | "open" => id(rest).map(Command::Show),
            "close" | "x" => Ok(Command::Close),
            "reload" | "r" | "" => Ok(Command::Reload),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command '{other}', try help")),
        }
    }
}

fn id(s: &str) -> Result<i32, String> {
    s.parse().map_err(|_| format!("expected a movie id, got '{s}'"))
}
