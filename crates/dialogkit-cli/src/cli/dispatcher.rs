use crate::cli::command_handlers::{
    AskHandler, ConfigHandler, ConvertHandler, SampleHandler, ZipHandler,
};
use crate::cli::main_types::Commands;
use dialogkit_core::error::AppError;
use dialogkit_core::storage::config::Config;
use dialogkit_core::utils::text::generate_id;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Config { command } => {
                let handler = ConfigHandler::new();
                let mut config = self.config.clone();
                handler.handle(command, &mut config, self.config_path.clone())
            }
            Commands::Convert(args) => {
                let handler = ConvertHandler::new();
                handler.handle(args).await
            }
            Commands::Zip { folder } => {
                let handler = ZipHandler::new();
                handler.handle(&folder)
            }
            Commands::Id { prefix, max_chars } => {
                println!("{}", generate_id(&prefix, max_chars));
                Ok(())
            }
            Commands::Ask(args) => {
                let handler = AskHandler::new(self.config.get_max_suggested());
                handler.handle(args)
            }
            Commands::Sample(args) => {
                let handler = SampleHandler::new();
                handler.handle(args)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::main_types::{ConfigCommands, ConvertArgs, DataFormat};
    use dialogkit_core::error::StorageError;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_dispatch_config_set_writes_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        let dispatcher = Dispatcher::new(Config::default(), Some(config_path.clone()));

        dispatcher
            .dispatch(Commands::Config {
                command: ConfigCommands::Set {
                    log_level: Some("info".to_string()),
                    log_file: None,
                    max_suggested: Some(4),
                },
            })
            .await
            .expect("config set should succeed");

        let saved = Config::load(Some(config_path)).unwrap();
        assert_eq!(saved.log_level.as_deref(), Some("info"));
        assert_eq!(saved.max_suggested, Some(4));
    }

    #[tokio::test]
    async fn test_dispatch_convert_missing_file_fails() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let dispatcher = Dispatcher::new(Config::default(), None);

        let result = dispatcher
            .dispatch(Commands::Convert(ConvertArgs {
                inputs: vec![temp_dir.path().join("missing.yml")],
                to: DataFormat::Json,
                out_dir: None,
            }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_dispatch_zip_rejects_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let file = temp_dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let dispatcher = Dispatcher::new(Config::default(), None);

        let result = dispatcher.dispatch(Commands::Zip { folder: file }).await;
        assert!(matches!(
            result,
            Err(AppError::Storage(StorageError::Archive { .. }))
        ));
    }
}
