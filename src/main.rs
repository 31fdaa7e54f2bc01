use clap::Parser;
use dex_view::cli::{Cli, Commands, View};
use dex_view::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _telemetry = dex_view::telemetry::init_telemetry(&config.telemetry)?;

    let display = &config.display;
    match cli.command {
        Commands::Book(args) => args.execute(View::OrderBook, display)?,
        Commands::Trades(args) => args.execute(View::Trades, display)?,
        Commands::Chart(args) => args.execute(View::PriceChart, display)?,
        Commands::MyTrades(args) => args.execute(View::MyTrades, display)?,
        Commands::MyOrders(args) => args.execute(View::MyOrders, display)?,
        Commands::Balances(args) => args.execute(View::Balances, display)?,
        Commands::Draft(args) => args.execute(display)?,
        Commands::Config => {
            println!("Current configuration:");
            println!("  Ether address: {}", display.ether_address);
            println!("  Token decimals: {}", display.token_decimals);
            println!(
                "  Precision: price={}, balance={}",
                display.price_precision, display.balance_precision
            );
            println!("  UTC offset: {} min", display.utc_offset_minutes);
            println!("  Timestamp format: {}", display.timestamp_format);
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
