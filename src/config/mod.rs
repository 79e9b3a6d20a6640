pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::{ConfigProvider, QueryEncoding};
    use crate::domain::model::{DEFAULT_QUERY_PARAMETER, DEFAULT_SEARCH_PATH};
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_endpoint_path, validate_non_empty_string, validate_url, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "doctor-search")]
    #[command(about = "Search doctors by problem and render the result cards")]
    pub struct CliConfig {
        #[arg(long, default_value = "", help = "Problem description to search for")]
        pub problem: String,

        #[arg(long, default_value = "http://127.0.0.1:8000")]
        pub base_url: String,

        #[arg(long, default_value = DEFAULT_SEARCH_PATH)]
        pub search_path: String,

        #[arg(long, default_value = DEFAULT_QUERY_PARAMETER)]
        pub query_parameter: String,

        #[arg(long, default_value = "./output/doctor-list.html")]
        pub output: String,

        #[arg(long, help = "Send the problem without percent-encoding")]
        pub raw_query: bool,

        #[arg(long, help = "TOML config file; overrides the endpoint options")]
        pub config: Option<String>,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn search_path(&self) -> &str {
            &self.search_path
        }

        fn query_parameter(&self) -> &str {
            &self.query_parameter
        }

        fn query_encoding(&self) -> QueryEncoding {
            if self.raw_query {
                QueryEncoding::Raw
            } else {
                QueryEncoding::Encoded
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("base_url", &self.base_url)?;
            validate_endpoint_path("search_path", &self.search_path)?;
            validate_non_empty_string("query_parameter", &self.query_parameter)?;
            validate_non_empty_string("output", &self.output)?;
            Ok(())
        }
    }

}
