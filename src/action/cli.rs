use clap::Parser;
use crate::config::config::{
    effective_log_level, resolve_mode, validate_file_patterns, validate_input_path, validate_mode, Cli,
};
use crate::action::interactive::process_interactive_mode;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::Result;
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::RunOutcome;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> Result<RunOutcome> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode(Cli::parse_from(args))
    }
}

pub fn process_cli_mode(cli: Cli) -> Result<RunOutcome> {
    setup_logging(effective_log_level(&cli.log_level, cli.verbose));

    // 僅提供 input（與 output）時使用預設配置
    let is_default_config = cli.mode.is_none()
        && !cli.recursive
        && !cli.keep_intermediate
        && cli.include == vec!["*".to_string()]
        && cli.exclude.is_none()
        && !cli.no_progress
        && cli.report.is_none();

    let config_port: Box<dyn ConfigPort> = if is_default_config {
        log::info!("未提供選項參數，使用預設配置：依輸入路徑判斷模式，不遞迴，不保留中間檔");
        Box::new(DefaultConfigAdapter::new(cli.input.clone(), cli.output.clone()))
    } else {
        Box::new(CliConfigAdapter::new(cli.clone()))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        validate_input_path(&self.cli.input, self.cli.mode)?;
        validate_file_patterns(&self.cli.include, &self.cli.exclude)?;
        let mode = resolve_mode(self.cli.mode, &self.cli.input);
        validate_mode(mode, &self.cli.input)?;

        log::debug!(
            "使用自訂配置：mode={:?}, recursive={}, keep_intermediate={}, include={:?}, exclude={:?}, no_progress={}, report={:?}",
            mode,
            self.cli.recursive,
            self.cli.keep_intermediate,
            self.cli.include,
            self.cli.exclude,
            self.cli.no_progress,
            self.cli.report
        );

        Ok(AppConfig {
            input: self.cli.input.clone(),
            output: self.cli.output.clone(),
            mode,
            recursive: self.cli.recursive,
            keep_intermediate: self.cli.keep_intermediate,
            include: self.cli.include.clone(),
            exclude: self.cli.exclude.clone(),
            no_progress: self.cli.no_progress,
            report: self.cli.report.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::Mode;
    use crate::error::Error;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("zst_to_csv").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_adapter_builds_batch_config() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().to_string_lossy().to_string();
        let cli = parse(&[input.as_str(), "-o", "processed", "-r", "--no-progress", "--report", "report.json"]);

        let config = CliConfigAdapter::new(cli).get_config().unwrap();

        assert_eq!(config.mode, Mode::Batch);
        assert!(config.recursive);
        assert!(config.no_progress);
        assert_eq!(config.report.as_deref(), Some("report.json"));
        let request = config.batch_request();
        assert_eq!(request.output_dir.as_deref(), Some(std::path::Path::new("processed")));
    }

    #[test]
    fn test_cli_adapter_rejects_invalid_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().to_string_lossy().to_string();
        let cli = parse(&[input.as_str(), "--exclude", "a|b"]);

        let err = CliConfigAdapter::new(cli).get_config().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_cli_mode_single_file_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("x.csv.zst");
        std::fs::write(&input, zstd::encode_all(&b"a,b\n1,2\n"[..], 3).unwrap()).unwrap();
        let cli = parse(&[input.to_str().unwrap(), "--no-progress"]);

        let outcome = process_cli_mode(cli).unwrap();

        match outcome {
            RunOutcome::Single(output) => {
                assert_eq!(output.output_path, dir.path().join("x.csv"));
                assert_eq!(output.summary.shape(), (1, 2));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_cli_mode_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv.zst");
        let cli = parse(&[missing.to_str().unwrap(), "-r"]);

        assert!(matches!(process_cli_mode(cli), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_cli_mode_missing_batch_root_is_directory_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("raw");
        let cli = parse(&[missing.to_str().unwrap(), "--mode", "batch", "--no-progress"]);

        let err = process_cli_mode(cli).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound { .. }));
        assert!(err.to_string().contains("目錄不存在"));
        assert!(!missing.exists());
    }
}
