use clap::Parser;
use vmr_generator::config::FileConfig;
use vmr_generator::domain::ports::{ConfigProvider, LiverySource};
use vmr_generator::mapping::Mappers;
use vmr_generator::sim::poller::SimPoller;
use vmr_generator::sim::{JsonFileSource, SampleSource};
use vmr_generator::utils::error::ErrorSeverity;
use vmr_generator::utils::{logger, validation::Validate};
use vmr_generator::{
    CliConfig, ExportEngine, ExportPipeline, FixedPrompt, LocalStorage, TracingNotifier, VmrError,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vmr-generator CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config_file.clone() {
        match FileConfig::from_path(&path) {
            Ok(file) => {
                tracing::info!("Applying config file {}", path.display());
                config.apply_file(file);
            }
            Err(e) => {
                fail(&e);
                std::process::exit(severity_exit_code(&e));
            }
        }
    }

    if let Err(e) = config.validate() {
        fail(&e);
        std::process::exit(severity_exit_code(&e));
    }

    if config.wait_for_sim {
        tracing::info!("Waiting for the simulator process...");
        SimPoller::new().wait_for_sim(config.poll_interval()).await;
    }

    let outcome = if config.sample {
        run_export(SampleSource::with_batch_size(config.batch_size), config).await
    } else {
        // validate() guarantees input is set when --sample is absent.
        let Some(input) = config.input.clone() else {
            unreachable!("validated config without input or sample");
        };

        let mappers = match Mappers::load(&config.airlines, &config.typecodes) {
            Ok(mappers) => mappers,
            Err(e) => {
                fail(&e);
                std::process::exit(severity_exit_code(&e));
            }
        };

        run_export(JsonFileSource::new(input, mappers, config.batch_size), config).await
    };

    match outcome {
        Ok(Some(path)) => {
            println!("✅ Model matching rules exported successfully!");
            println!("📁 Output saved to: {}", path);
        }
        Ok(None) => {
            println!("No output file chosen, nothing was written.");
        }
        Err(e) => {
            tracing::error!(
                "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(&e);

            let exit_code = severity_exit_code(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run_export<L: LiverySource>(
    source: L,
    config: CliConfig,
) -> vmr_generator::Result<Option<String>> {
    let prompt = FixedPrompt::new(config.output.clone());
    let pipeline = ExportPipeline::new(LocalStorage::new(), config, source, prompt);
    let engine = ExportEngine::new(pipeline, TracingNotifier);

    engine.run().await
}

fn fail(e: &VmrError) {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

fn severity_exit_code(e: &VmrError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
