//! Configuração do simmer carregada a partir de `simmer.toml`.
//!
//! A struct [`SimmerConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis. As variáveis de
//! ambiente `EXTRACTION_ENDPOINT` e `SYNC_TIMEOUT_SECS` têm precedência
//! sobre o arquivo.

use std::path::Path;
use std::time::Duration;

use anyhow::{Result, bail};
use serde::Deserialize;

use crate::sync::SyncSettings;

/// Configuração de nível superior carregada de `simmer.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimmerConfig {
    /// URL do serviço externo de extração de receitas. Obrigatória, sem
    /// default: uma sincronização não pode ser construída sem ela.
    #[serde(default)]
    pub extraction_endpoint: String,

    /// Limite global em segundos para a fase de coleta de uma sincronização.
    #[serde(default = "default_sync_timeout_secs")]
    pub sync_timeout_secs: u64,

    /// Atraso fixo em milissegundos entre lançamentos de workers.
    #[serde(default = "default_launch_stagger_ms")]
    pub launch_stagger_ms: u64,
}

// Valor padrão para o timeout de coleta: 900s = 15 min.
fn default_sync_timeout_secs() -> u64 {
    900
}

// Valor padrão para o atraso entre lançamentos: 2000ms.
fn default_launch_stagger_ms() -> u64 {
    2000
}

impl Default for SimmerConfig {
    fn default() -> Self {
        Self {
            extraction_endpoint: String::new(),
            sync_timeout_secs: default_sync_timeout_secs(),
            launch_stagger_ms: default_launch_stagger_ms(),
        }
    }
}

impl SimmerConfig {
    /// Carrega a configuração de `simmer.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        let path = Path::new("simmer.toml");
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<SimmerConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variáveis de ambiente têm precedência sobre o arquivo.
        if let Ok(endpoint) = std::env::var("EXTRACTION_ENDPOINT")
            && !endpoint.is_empty()
        {
            config.extraction_endpoint = endpoint;
        }
        if let Ok(timeout) = std::env::var("SYNC_TIMEOUT_SECS")
            && let Ok(secs) = timeout.parse::<u64>()
        {
            config.sync_timeout_secs = secs;
        }

        Ok(config)
    }

    /// Valida e retorna a URL do serviço de extração.
    pub fn require_extraction_endpoint(&self) -> Result<&str> {
        if self.extraction_endpoint.is_empty() {
            bail!(
                "extraction endpoint is not configured \
                 (set `extraction_endpoint` in simmer.toml or EXTRACTION_ENDPOINT)"
            );
        }
        Ok(&self.extraction_endpoint)
    }

    /// Converte a configuração nos parâmetros do orquestrador.
    pub fn sync_settings(&self) -> SyncSettings {
        SyncSettings {
            collection_timeout: Duration::from_secs(self.sync_timeout_secs),
            launch_stagger: Duration::from_millis(self.launch_stagger_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = SimmerConfig::default();
        assert!(config.extraction_endpoint.is_empty());
        assert_eq!(config.sync_timeout_secs, 900);
        assert_eq!(config.launch_stagger_ms, 2000);
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            extraction_endpoint = "http://localhost:8090/extract"
            sync_timeout_secs = 120
        "#;
        let config: SimmerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.extraction_endpoint, "http://localhost:8090/extract");
        assert_eq!(config.sync_timeout_secs, 120);
        assert_eq!(config.launch_stagger_ms, 2000);
    }

    #[test]
    fn missing_endpoint_is_rejected() {
        let config = SimmerConfig::default();
        assert!(config.require_extraction_endpoint().is_err());

        let configured = SimmerConfig {
            extraction_endpoint: "http://localhost:8090/extract".into(),
            ..Default::default()
        };
        assert_eq!(
            configured.require_extraction_endpoint().unwrap(),
            "http://localhost:8090/extract"
        );
    }

    #[test]
    fn sync_settings_conversion() {
        let config = SimmerConfig {
            extraction_endpoint: "http://localhost:8090".into(),
            sync_timeout_secs: 60,
            launch_stagger_ms: 250,
        };
        let settings = config.sync_settings();
        assert_eq!(settings.collection_timeout, Duration::from_secs(60));
        assert_eq!(settings.launch_stagger, Duration::from_millis(250));
    }
}
