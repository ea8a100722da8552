use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use smart_budget::cli::{
    handle_export_command, handle_report_command, import_files, parse_money, ExportArgs,
    ReportArgs,
};
use smart_budget::config::logging::{init_logging, LogTarget};
use smart_budget::config::{BudgetPaths, Settings};
use smart_budget::models::Money;
use smart_budget::storage::Session;

#[derive(Parser)]
#[command(
    name = "smart-budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal budget tracker",
    long_about = "Smart Budget keeps a ledger of income and expenses for one session, \
                  imports and exports CSV files, compares spending against a monthly \
                  budget and suggests where to cut back."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// CSV files to import at startup
        #[arg(short, long = "import")]
        import: Vec<PathBuf>,

        /// Initial monthly budget (defaults to the configured budget)
        #[arg(short, long, value_parser = parse_money)]
        budget: Option<Money>,
    },

    /// Print totals, category breakdown and suggestions for CSV files
    Report(ReportArgs),

    /// Merge CSV files and write a normalized export
    Export(ExportArgs),

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui { import, budget }) => {
            paths.ensure_directories()?;
            init_logging(&settings, LogTarget::File(paths.log_file()))?;

            let mut session = Session::new(budget.unwrap_or(settings.monthly_budget));
            let imports = import_files(&mut session, &import);
            smart_budget::tui::run_tui(session, settings, imports)?;
        }
        Some(Commands::Report(args)) => {
            init_logging(&settings, LogTarget::Stderr)?;
            handle_report_command(args, &settings)?;
        }
        Some(Commands::Export(args)) => {
            init_logging(&settings, LogTarget::Stderr)?;
            handle_export_command(args, &settings)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Smart Budget at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Configuration written to {}", paths.settings_file().display());
            println!();
            println!("Transactions are kept for one session only; use 'smart-budget export'");
            println!("or the export dialog in the TUI to keep them as CSV.");
        }
        Some(Commands::Config) => {
            println!("Smart Budget Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Monthly budget:  {}", settings.format_money(settings.monthly_budget));
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
            println!("  Export file:     {}", settings.export_file_name);
        }
        None => {
            println!("Smart Budget - Terminal-based personal budget tracker");
            println!();
            println!("Run 'smart-budget --help' for usage information.");
            println!("Run 'smart-budget tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
