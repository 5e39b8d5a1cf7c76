use crate::cli::Command;

pub mod extract;
pub mod list;
pub mod parse;

pub fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::List(args) => list::run(args),
        Command::Parse(args) => parse::run(args),
        Command::Extract(args) => extract::run(args),
    }
}
