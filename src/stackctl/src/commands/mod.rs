use crate::lib::environment::Environment;
use crate::lib::error::StackResult;
use clap::Subcommand;

mod list;
mod remove;
mod stop;

#[derive(Subcommand)]
pub enum StackCommand {
    #[command(visible_alias = "ls")]
    List(list::ListOpts),
    #[command(visible_alias = "rm")]
    Remove(remove::RemoveOpts),
    Stop(stop::StopOpts),
}

pub fn exec(env: &dyn Environment, cmd: StackCommand) -> StackResult {
    match cmd {
        StackCommand::List(v) => list::exec(env, v),
        StackCommand::Remove(v) => remove::exec(env, v),
        StackCommand::Stop(v) => stop::exec(env, v),
    }
}
