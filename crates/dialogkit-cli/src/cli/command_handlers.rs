use crate::cli::main_types::{AskArgs, ConfigCommands, ConvertArgs, DataFormat, SampleArgs};
use dialogkit_core::error::{AppError, CliError};
use dialogkit_core::storage::archive::zip_folder;
use dialogkit_core::storage::config::Config;
use dialogkit_core::storage::file::{
    create_dir_for_file, dump_json_to_file, read_file, read_json_file,
};
use dialogkit_core::storage::yaml::{dump_yaml_to_file, read_yaml_file};
use dialogkit_core::utils::color::{TermColor, print_color};
use dialogkit_core::utils::input::request_input;
use dialogkit_core::utils::logging::LogLevel;
use dialogkit_core::utils::sampling::subsample_slice;
use dialogkit_core::utils::text::cap_length;
use dialogkit_core::utils::threads::wait_for_threads;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config: &mut Config,
        config_path: Option<PathBuf>,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                log::debug!("Showing configuration");

                let location = match &config_path {
                    Some(path) => path.clone(),
                    None => Config::config_file_path()?,
                };

                println!("Current Configuration:");
                println!("=====================");
                println!("Config file: {}", location.display());
                println!("Log level: {}", config.get_log_level());
                match config.get_log_file() {
                    Some(path) => println!("Log file: {}", path.display()),
                    None => println!("Log file: (none)"),
                }
                println!("Max suggested answers: {}", config.get_max_suggested());
                Ok(())
            }
            ConfigCommands::Set {
                log_level,
                log_file,
                max_suggested,
            } => {
                log::debug!(
                    "Setting configuration - log_level: {:?}, log_file: {:?}, max_suggested: {:?}",
                    log_level,
                    log_file,
                    max_suggested
                );

                let mut updated_fields = Vec::new();

                if let Some(level) = log_level {
                    let level: LogLevel = level.parse()?;
                    config.set_log_level(level);
                    updated_fields.push(format!("log level to: {}", level));
                }

                if let Some(path) = log_file {
                    updated_fields.push(format!("log file to: {}", path.display()));
                    config.set_log_file(path);
                }

                if let Some(max) = max_suggested {
                    config.set_max_suggested(max);
                    updated_fields.push(format!("max suggested to: {}", max));
                }

                if updated_fields.is_empty() {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "No configuration values provided. \
                         Use --log-level, --log-file or --max-suggested"
                            .to_string(),
                    )));
                }

                config.save(config_path)?;
                print_color(
                    &format!("✅ Set {}", updated_fields.join(", ")),
                    TermColor::OkGreen,
                );
                println!("Configuration saved successfully.");
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct ConvertHandler;

impl ConvertHandler {
    pub fn new() -> Self {
        Self
    }

    /// Convert every input on its own worker thread
    pub async fn handle(&self, args: ConvertArgs) -> Result<(), AppError> {
        let total = args.inputs.len();
        let jobs = args
            .inputs
            .into_iter()
            .map(|input| {
                let output = output_path(&input, args.to, args.out_dir.as_deref());
                (input, output)
            })
            .collect();

        let failed = convert_all(jobs, args.to, convert_file).await;
        if failed > 0 {
            return Err(AppError::Cli(CliError::ConversionFailed { failed, total }));
        }
        Ok(())
    }
}

type ConvertFn = fn(&Path, &Path, DataFormat) -> Result<(), AppError>;

/// Run `convert` on one thread per job and count the jobs that failed or panicked
async fn convert_all(
    jobs: Vec<(PathBuf, PathBuf)>,
    to: DataFormat,
    convert: ConvertFn,
) -> usize {
    let failures = Arc::new(AtomicUsize::new(0));
    let mut handles = Vec::with_capacity(jobs.len());

    for (input, output) in jobs {
        let failures = Arc::clone(&failures);
        handles.push(thread::spawn(move || match convert(&input, &output, to) {
            Ok(()) => println!("{} -> {}", input.display(), output.display()),
            Err(e) => {
                log::error!("Failed to convert {}: {}", input.display(), e);
                failures.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    let panicked = wait_for_threads(handles).await;
    failures.load(Ordering::Relaxed) + panicked
}

fn output_path(input: &Path, to: DataFormat, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "converted".to_string());
    let file_name = format!("{}.{}", stem, to.extension());
    match out_dir.or_else(|| input.parent()) {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn convert_file(input: &Path, output: &Path, to: DataFormat) -> Result<(), AppError> {
    let from = DataFormat::from_path(input).ok_or_else(|| {
        CliError::InvalidArguments(format!(
            "Cannot tell the format of '{}', expected .json, .yml or .yaml",
            input.display()
        ))
    })?;

    // serde_yaml::Value keeps mapping order for both formats
    let value: serde_yaml::Value = match from {
        DataFormat::Json => read_json_file(input)?,
        DataFormat::Yaml => read_yaml_file(input)?,
    };

    create_dir_for_file(output)?;
    match to {
        DataFormat::Json => dump_json_to_file(output, &value)?,
        DataFormat::Yaml => dump_yaml_to_file(output, &value)?,
    }
    log::info!("Converted {} to {}", input.display(), output.display());
    Ok(())
}

#[derive(Default)]
pub struct ZipHandler;

impl ZipHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, folder: &Path) -> Result<(), AppError> {
        let archive = zip_folder(folder)?;
        println!("{}", archive.display());
        Ok(())
    }
}

pub struct AskHandler {
    default_max_suggested: usize,
}

impl AskHandler {
    pub fn new(default_max_suggested: usize) -> Self {
        Self {
            default_max_suggested,
        }
    }

    pub fn handle(&self, args: AskArgs) -> Result<(), AppError> {
        let max_suggested = args.max_suggested.unwrap_or(self.default_max_suggested);
        let answer = request_input(
            args.valid.as_deref(),
            args.prompt.as_deref(),
            max_suggested,
        )?;
        print_color(&answer, TermColor::OkGreen);
        Ok(())
    }
}

#[derive(Default)]
pub struct SampleHandler;

impl SampleHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, args: SampleArgs) -> Result<(), AppError> {
        let content = read_file(&args.file)?;
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

        let mut seeded = args.seed.map(StdRng::seed_from_u64);
        let rng = seeded.as_mut().map(|r| r as &mut dyn RngCore);

        let sample = subsample_slice(&lines, args.max, rng);
        log::debug!("Sampled {} of {} lines", sample.len(), lines.len());

        for line in sample {
            println!("{}", cap_length(line, args.width, true));
        }
        Ok(())
    }
}
