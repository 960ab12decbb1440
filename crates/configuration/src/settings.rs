use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// The root configuration structure for the report generator.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub report: ReportConfig,
}

/// Parameters for a single report-generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Monthly equivalent of the US 10-year treasury yield. Subtracted from
    /// every monthly profit bucket to form the excess-return series; never
    /// derived from the data.
    pub risk_free_monthly_rate: f64,
    /// The results log produced by the trading run, one record per line.
    pub results_file: PathBuf,
    /// Destination of the structured analysis artifact.
    pub analysis_file: PathBuf,
}

impl Config {
    /// Rejects settings no run could complete with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.report.risk_free_monthly_rate.is_finite() {
            return Err(ConfigError::ValidationError(
                "report.risk_free_monthly_rate must be a finite number".to_string(),
            ));
        }
        if self.report.results_file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "report.results_file must not be empty".to_string(),
            ));
        }
        if self.report.analysis_file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "report.analysis_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(raw: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn parses_a_full_config() {
        let config = parse(
            r#"
            [report]
            risk_free_monthly_rate = 0.12
            results_file = "results"
            analysis_file = "analysis.json"
            "#,
        );

        assert_eq!(config.report.risk_free_monthly_rate, 0.12);
        assert_eq!(config.report.results_file, Path::new("results"));
        assert_eq!(config.report.analysis_file, Path::new("analysis.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_a_non_finite_rate() {
        let config = parse(
            r#"
            [report]
            risk_free_monthly_rate = inf
            results_file = "results"
            analysis_file = "analysis.json"
            "#,
        );

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_an_empty_results_path() {
        let config = parse(
            r#"
            [report]
            risk_free_monthly_rate = 0.12
            results_file = ""
            analysis_file = "analysis.json"
            "#,
        );

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
