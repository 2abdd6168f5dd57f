use std::{io, process::ExitCode};

use budget_console::{
    banner::{Banner, Notice},
    format_amount, init,
    report::ErrorBlock,
    utils::build_info,
    Console, OutputError, Severity,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "budget_console")]
#[command(about = "Terminal output helpers for budgeting CLIs.")]
#[command(version = build_info::CLI_VERSION)]
struct CommandLine {
    /// Lowest severity that is printed
    #[arg(long, global = true, default_value = "INFO")]
    min_level: Severity,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print amounts with two decimals and thousands separators
    #[command(alias = "a")]
    Amount {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Print the version header and license notice
    #[command(alias = "b")]
    Banner {
        #[arg(long, default_value = "Budget Console contributors")]
        holder: String,
    },
    /// Emit a single log line
    #[command(alias = "l")]
    Log {
        #[arg(long, default_value = "INFO")]
        level: Severity,
        message: String,
    },
}

fn run(commands: CommandLine, console: &Console<io::Stdout>) -> Result<(), OutputError> {
    match commands.command {
        Commands::Amount { values } => {
            for value in values {
                console.write_raw(format!("{}\n", format_amount(value)?))?;
            }
            Ok(())
        }
        Commands::Banner { holder } => {
            console.write_raw(Banner::default().init_message_for_build())?;
            console.write_raw(format!("build {}\n\n", build_info::current().long_version()))?;
            console.write_raw(Notice::gpl(holder).render())
        }
        Commands::Log { level, message } => console.log(level, message),
    }
}

fn main() -> ExitCode {
    init();
    let commands = CommandLine::parse();
    let console = Console::stdout().with_min_severity(commands.min_level);

    match run(commands, &console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(io_err) =
                ErrorBlock::default().report_with_source(&console, &err, "budget_console failed")
            {
                eprintln!("Error: {io_err}");
            }
            ExitCode::FAILURE
        }
    }
}
