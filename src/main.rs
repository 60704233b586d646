use clap::Parser;

use choropleth::cli::{Cli, Commands};
use choropleth::commands::{run_attributes, run_classify, run_init, run_render};
use choropleth::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Classify(args) => run_classify(args, &cli),
        Commands::Attributes(args) => run_attributes(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
