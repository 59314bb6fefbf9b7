use candle_orders::domain::model::{Notification, NotificationKind};
use candle_orders::domain::ports::ConfigProvider;
use candle_orders::utils::{logger, validation::Validate};
use candle_orders::{CliConfig, FileConfig, HttpCatalog, MondayGateway, OrderEngine, OrderInput};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting candle-orders CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // The credential is injected out-of-band. A missing key is not treated
    // as a config error; it surfaces as an authorization failure from the
    // board API.
    if cli.api_key.is_empty() {
        if let Ok(key) = std::env::var("MONDAY_API_KEY") {
            cli.api_key = key;
        }
    }

    let input = OrderInput {
        first_name: cli.first_name.clone(),
        last_name: cli.last_name.clone(),
        quantity: cli.quantity,
        fragrances: cli.fragrances.clone(),
    };

    let result = match cli.config.clone() {
        Some(path) => match FileConfig::from_file(&path) {
            Ok(mut config) => {
                if config.api.key.is_none() && !cli.api_key.is_empty() {
                    config.api.key = Some(cli.api_key.clone());
                }
                run_order(config, input).await
            }
            Err(e) => Err(e),
        },
        None => run_order(cli, input).await,
    };

    match result {
        Ok(notification) => match notification.kind {
            NotificationKind::Positive => {
                tracing::info!("✅ Order workflow completed");
                println!("✅ {}", notification.message);
            }
            NotificationKind::Negative => {
                eprintln!("❌ {}", notification.message);
                std::process::exit(1);
            }
        },
        Err(e) => {
            tracing::error!("❌ Order workflow failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run_order<C>(config: C, input: OrderInput) -> candle_orders::Result<Notification>
where
    C: ConfigProvider + Validate + Clone,
{
    config.validate()?;

    let engine = OrderEngine::new(
        HttpCatalog::new(config.clone()),
        MondayGateway::new(config),
    );
    engine.run(input).await
}
