use std::fs;
use std::io::Read;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{PatchlyzerError, PatchlyzerResult};
use crate::logger::report_logger::ReportLogger;
use crate::services::patch_note_detector::PatchNoteDetector;
use crate::services::patch_note_transformer::PatchNoteTransformer;
use crate::traits::note_detector::NoteDetector;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> PatchlyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Analyze { file, json } => self.analyze_command(file, json).await,
            Commands::Check { file } => self.check_command(file).await,
            Commands::Validate => self.validate_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> PatchlyzerResult<()> {
        log::info!("🚀 Initializing patchlyzer configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("🔧 Run 'patchlyzer validate' to check your configuration.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn analyze_command(&self, file: Option<String>, json: bool) -> PatchlyzerResult<()> {
        log::info!("🔍 Analyzing patch note draft...");

        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config)?;

        let text = self.read_input(file)?;
        let transformer = PatchNoteTransformer::new(&config);

        if json {
            let (note, analysis) = transformer.transform_to_parts(&text)?;
            let payload = serde_json::json!({ "note": note, "analysis": analysis });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            let markdown = transformer.transform(&text)?;
            print!("{}", markdown);
        }

        log::info!("✅ Analysis complete");
        Ok(())
    }

    async fn check_command(&self, file: Option<String>) -> PatchlyzerResult<()> {
        log::info!("🚦 Checking whether input looks like a patch note...");

        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config)?;

        let text = self.read_input(file)?;
        let detector = PatchNoteDetector::new(config.detection.score_threshold);
        let report = detector.detect(&text);

        ReportLogger::print_detection(&report);

        if report.is_patch_note() {
            let transformer = PatchNoteTransformer::new(&config);
            let (_, analysis) = transformer.transform_to_parts(&text)?;
            ReportLogger::print_analysis(&analysis);
        }

        Ok(())
    }

    async fn validate_command(&self) -> PatchlyzerResult<()> {
        log::info!("🔧 Validating configuration...");

        let config = match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'patchlyzer init' to create a configuration file.");
                return Err(e);
            }
        };

        ConfigManager::validate_config(&config)?;

        log::info!("✅ Configuration is valid");
        log::info!("   Detection threshold: {}", config.detection.score_threshold);
        log::info!("   Input limit: {} bytes", config.limits.max_input_bytes);
        log::info!(
            "   Extra invert keywords: {}",
            config.guesser.extra_invert_keywords.len()
        );
        Ok(())
    }

    fn read_input(&self, file: Option<String>) -> PatchlyzerResult<String> {
        match file {
            Some(path) => fs::read_to_string(&path)
                .map_err(|e| PatchlyzerError::file_error(&path, "read", &e.to_string())),
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| PatchlyzerError::system_error("read stdin", &e.to_string()))?;
                Ok(buffer)
            }
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
