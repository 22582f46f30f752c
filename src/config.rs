//! Configuração do stumble carregada a partir de `stumble.toml`.
//!
//! A struct [`StumbleConfig`] contém a credencial e o endpoint do catálogo.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `CAT_API_KEY` tem precedência sobre o arquivo.
//! A credencial é configuração de processo, nunca entrada em tempo de execução.

use serde::Deserialize;
use std::path::Path;

use crate::error::StumbleError;

/// Configuração de nível superior carregada de `stumble.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StumbleConfig {
    /// Chave da API do catálogo (The Cat API).
    #[serde(default)]
    pub api_key: String,

    /// Endpoint de busca do catálogo.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

// Endpoint público de busca da The Cat API.
fn default_api_url() -> String {
    "https://api.thecatapi.com/v1/images/search".to_string()
}

impl Default for StumbleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
        }
    }
}

impl StumbleConfig {
    /// Carrega a configuração de `stumble.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self, StumbleError> {
        Self::load_from(Path::new("stumble.toml"))
    }

    /// Carrega a configuração do caminho dado, aplicando a precedência da
    /// variável de ambiente sobre a chave API.
    pub fn load_from(path: &Path) -> Result<Self, StumbleError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<StumbleConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo de configuração para a chave API.
        if let Ok(key) = std::env::var("CAT_API_KEY")
            && !key.is_empty()
        {
            config.api_key = key;
        }

        Ok(config)
    }
}
