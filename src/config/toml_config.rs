use crate::adapters::export::ExportFormat;
use crate::adapters::fake_data::FakeDataGenerator;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_path, validate_range,
    validate_photo_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ORDER_COUNT: usize = 50;
pub const MAX_ORDER_COUNT: usize = 10_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderConfig {
    #[serde(default)]
    pub seed: SeedConfig,
    pub names: Option<NamesConfig>,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    pub count: Option<usize>,
    pub rng_seed: Option<u64>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamesConfig {
    pub first_names: Option<Vec<String>>,
    pub last_names: Option<Vec<String>>,
    pub company_suffixes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub output_path: String,
}

impl OrderConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${IMAGE_HOST})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrderError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn count(&self) -> usize {
        self.seed.count.unwrap_or(DEFAULT_ORDER_COUNT)
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.seed.rng_seed
    }

    pub fn export(&self) -> Option<&ExportConfig> {
        self.export.as_ref()
    }

    pub fn build_generator(&self) -> FakeDataGenerator {
        let mut generator = FakeDataGenerator::new(self.rng_seed());

        if let Some(images) = &self.seed.images {
            generator = generator.with_images(images.clone());
        }
        if let Some(names) = &self.names {
            if let Some(first) = &names.first_names {
                generator = generator.with_first_names(first.clone());
            }
            if let Some(last) = &names.last_names {
                generator = generator.with_last_names(last.clone());
            }
            if let Some(suffixes) = &names.company_suffixes {
                generator = generator.with_company_suffixes(suffixes.clone());
            }
        }
        generator
    }
}

impl Validate for OrderConfig {
    fn validate(&self) -> Result<()> {
        validate_range("seed.count", self.count(), 0, MAX_ORDER_COUNT)?;

        if let Some(images) = &self.seed.images {
            validate_non_empty_list("seed.images", images)?;
            for image in images {
                validate_photo_url("seed.images", image)?;
            }
        }

        if let Some(names) = &self.names {
            let pools = [
                ("names.first_names", &names.first_names),
                ("names.last_names", &names.last_names),
                ("names.company_suffixes", &names.company_suffixes),
            ];
            for (field, pool) in pools {
                if let Some(pool) = pool {
                    validate_non_empty_list(field, pool)?;
                    for value in pool {
                        validate_non_empty_string(field, value)?;
                    }
                }
            }
        }

        if let Some(export) = &self.export {
            validate_path("export.output_path", &export.output_path)?;
        }

        tracing::debug!("✅ Order configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = OrderConfig::from_toml_str("").unwrap();
        assert_eq!(config.count(), DEFAULT_ORDER_COUNT);
        assert!(config.rng_seed().is_none());
        assert!(config.export().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = OrderConfig::from_toml_str(
            r#"
[seed]
count = 12
rng_seed = 99
images = ["https://example.com/a.jpg"]

[names]
first_names = ["Ada"]

[export]
format = "csv"
output_path = "./out/orders.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.count(), 12);
        assert_eq!(config.rng_seed(), Some(99));
        assert_eq!(config.export().unwrap().format, ExportFormat::Csv);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let bad_image = OrderConfig::from_toml_str("[seed]\nimages = [\"file:///tmp/a.jpg\"]\n")
            .unwrap();
        assert!(bad_image.validate().is_err());

        let too_many = OrderConfig::from_toml_str("[seed]\ncount = 20000\n").unwrap();
        assert!(matches!(
            too_many.validate(),
            Err(OrderError::InvalidConfigValueError { .. })
        ));

        let empty_names = OrderConfig::from_toml_str("[names]\nlast_names = []\n").unwrap();
        assert!(empty_names.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        assert!(matches!(
            OrderConfig::from_toml_str("[seed\ncount = 1"),
            Err(OrderError::TomlError(_))
        ));
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let processed =
            OrderConfig::substitute_env_vars("path = \"${MOCK_ORDERS_SURELY_UNSET_VAR}\"").unwrap();
        assert_eq!(processed, "path = \"${MOCK_ORDERS_SURELY_UNSET_VAR}\"");
    }
}
