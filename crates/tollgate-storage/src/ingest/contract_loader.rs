//! Contract documents on disk. The format follows the file extension.

use std::path::Path;

use tollgate_core::errors::ContractError;
use tollgate_core::types::ContractSpec;

/// Serialization format of a contract document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFormat {
    Yaml,
    Json,
    Toml,
}

impl ContractFormat {
    /// Detect the format from the path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ContractError> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ContractError::UnsupportedFormat {
                path: path.display().to_string(),
                extension,
            }),
        }
    }
}

/// Read and parse the contract at `path`.
pub fn load_contract(path: &Path) -> Result<ContractSpec, ContractError> {
    let format = ContractFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| ContractError::Unreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let contract = parse_contract(&content, format, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        features = contract.len(),
        "contract loaded"
    );
    Ok(contract)
}

/// Parse contract text. `label` names the source in error messages.
pub fn parse_contract(
    content: &str,
    format: ContractFormat,
    label: &str,
) -> Result<ContractSpec, ContractError> {
    let parse_error = |message: String| ContractError::Parse {
        path: label.to_string(),
        message,
    };
    match format {
        // An empty YAML document is an empty contract.
        ContractFormat::Yaml if content.trim().is_empty() => Ok(ContractSpec::default()),
        ContractFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
        ContractFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
        ContractFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}
