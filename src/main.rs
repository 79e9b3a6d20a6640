use clap::Parser;
use doctor_search::core::ResultsContainer;
use doctor_search::utils::error::{ErrorSeverity, SearchError};
use doctor_search::utils::{logger, validation::Validate};
use doctor_search::{
    CliConfig, Document, ElementIds, FileContainer, HttpDoctorSource, SearchController,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting doctor-search CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config).await {
        Ok(count) => {
            tracing::info!("✅ Search completed with {} doctors", count);
            println!("✅ Found {} doctors", count);
            println!("📁 Results saved to: {}", config.output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<usize, SearchError> {
    config.validate()?;

    let (source, ids) = match &config.config {
        Some(path) => {
            tracing::info!("📄 Loading config from {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            (
                HttpDoctorSource::from_config(&file_config)?,
                file_config.element_ids(),
            )
        }
        None => (HttpDoctorSource::from_config(config)?, ElementIds::default()),
    };

    // 建立只有輸入欄位與結果容器的頁面
    let mut document = Document::new();
    document.insert_input(ids.input_id.as_str(), config.problem.as_str());
    let results = document.insert_container(ids.container_id.as_str());

    let controller = SearchController::from_document(&document, source, &ids)?;
    let count = controller.invoke().await?;

    FileContainer::new(&config.output)
        .replace_content(&results.inner_html())
        .await?;

    Ok(count)
}
