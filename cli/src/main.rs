mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, targets, tool};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    match commands.command {
        Commands::Check(args) => {
            let q_level: u8 = if args.json { 2 } else { commands.quiet };
            print::banner(q_level);
            check::check(args, q_level).await
        }
        Commands::Targets => {
            print::banner(commands.quiet);
            targets::targets(commands.quiet);
            Ok(())
        }
        Commands::Tool => tool::tool(commands.quiet).await,
    }
}
