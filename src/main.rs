use clap::Parser;

use copyright_guard::cli::{Cli, Commands};
use copyright_guard::commands::{run_check, run_config, run_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
