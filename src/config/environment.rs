//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables son
//! opcionales y tienen un valor por defecto.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Backend de persistencia seleccionado con `STORE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::Postgres => write!(f, "postgres"),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub store: StoreBackend,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(3001),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            store: env::var("STORE")
                .ok()
                .and_then(|store| store.parse().ok())
                .unwrap_or(StoreBackend::Memory),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_from_str() {
        assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert_eq!(" Postgres ".parse::<StoreBackend>(), Ok(StoreBackend::Postgres));
        assert!("mongo".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("http://localhost:3000, https://app.example.com,,");
        assert_eq!(origins, vec!["http://localhost:3000", "https://app.example.com"]);
    }

    #[test]
    fn test_server_url() {
        let config = EnvironmentConfig {
            environment: "production".to_string(),
            port: 8080,
            host: "127.0.0.1".to_string(),
            store: StoreBackend::Memory,
            cors_origins: Vec::new(),
        };
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert!(config.is_production());
    }
}
