use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "candle-orders")]
#[command(about = "Order entry for the candle production board")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3000/fragrance")]
    pub catalog_endpoint: String,

    #[arg(long, default_value = "https://api.monday.com/v2")]
    pub api_endpoint: String,

    #[arg(long, default_value = "2023-04")]
    pub api_version: String,

    /// Board API credential. Falls back to the MONDAY_API_KEY environment
    /// variable when not given.
    #[arg(long, default_value = "")]
    pub api_key: String,

    #[arg(long, default_value = "7302640219")]
    pub board_id: u64,

    #[arg(long, default_value = "topics")]
    pub group_id: String,

    /// TOML file overriding the endpoint and board settings above.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "0")]
    pub quantity: u32,

    #[arg(long, value_delimiter = ',')]
    pub fragrances: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.catalog_endpoint
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn board_id(&self) -> u64 {
        self.board_id
    }

    fn group_id(&self) -> &str {
        &self.group_id
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog_endpoint", &self.catalog_endpoint)?;
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("api_version", &self.api_version)?;
        validate_non_empty_string("group_id", &self.group_id)?;
        validate_positive_number("board_id", self.board_id, 1)?;
        Ok(())
    }
}
