mod config;
mod home_directory;
mod sum;

use {
    crate::{
        config::Config,
        home_directory::HomeDirectory,
        sum::{SumAllCmd, SumCmd},
    },
    clap::Parser,
    config_parser::parse_config,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Directory holding the config file [default: ~/.adder]
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Add two integers
    Sum(SumCmd),

    /// Add any number of integers
    SumAll(SumAllCmd),
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Find the home directory from the CLI `--home` flag.
    let app_dir = HomeDirectory::new_or_default(cli.home)?;

    // Parse the config file.
    let cfg: Config = parse_config(app_dir.config_file())?;

    // Set up tracing.
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Sum(cmd) => cmd.run(cfg.adder.overflow),
        Command::SumAll(cmd) => cmd.run(cfg.adder.overflow),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::CommandFactory};

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["adder", "--home", "/tmp/x", "sum", "-1", "2"]).unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Command::Sum(_)));

        let cli = Cli::try_parse_from(["adder", "sum-all", "1", "2", "3"]).unwrap();
        assert!(matches!(cli.command, Command::SumAll(_)));
    }
}
