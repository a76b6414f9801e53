use super::args::{Cli, Command};

pub mod init;
pub mod run;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args).await,
        Command::Init(args) => init::run(args),
    }
}
