// ============================================================================
// Loader : fichier de configuration
// ============================================================================
// Charge spotter.toml, le parse et le valide avant de rendre la main
// au reste du firmware
//
// CONCEPTS RUST :
// 1. thiserror : enum d'erreurs typées avec messages formatés
//    - Chaque cas d'échec du loader a sa propre variante
//    - #[from] : conversion automatique depuis toml::de::Error avec ?
// 2. Validation séparée du parsing :
//    - Le parsing vérifie la forme (TOML bien formé, bons types)
//    - La validation vérifie le sens (intervalle > 0, thème connu, etc.)
// ============================================================================

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{SpotterConfig, Theme};

/// Longueur maximale d'un SSID en octets (limite IEEE 802.11)
pub const SSID_MAX_BYTES: usize = 32;

/// Longueur maximale d'une passphrase WPA2 en octets
pub const PASSWORD_MAX_BYTES: usize = 63;

/// Erreurs du loader de configuration
///
/// CONCEPT RUST : enum avec données
/// - Chaque variante transporte le contexte nécessaire au diagnostic
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Le fichier n'a pas pu être lu
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Le contenu n'est pas du TOML valide pour SpotterConfig
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Le contenu parse mais viole une contrainte de la config
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Charge et valide la configuration depuis un fichier TOML
///
/// # Arguments
/// * `path` - Chemin du fichier (ex: "spotter.toml")
///
/// # Retourne
/// * `Result<SpotterConfig, ConfigError>` - Config validée ou erreur
pub fn load(path: impl AsRef<Path>) -> Result<SpotterConfig, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading config file");

    // CONCEPT RUST : map_err pour attacher le chemin à l'erreur IO
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let config = from_toml_str(&contents)?;
    info!(
        path = %path.display(),
        coins = config.binance.coin_count(),
        theme = %config.display.theme,
        "Config loaded"
    );
    Ok(config)
}

/// Parse et valide la configuration depuis une chaîne TOML
///
/// Même chose que load() sans la lecture de fichier (pratique en test)
pub fn from_toml_str(contents: &str) -> Result<SpotterConfig, ConfigError> {
    let config: SpotterConfig = toml::from_str(contents)?;
    validate(&config)?;
    Ok(config)
}

/// Vérifie les contraintes que le type SpotterConfig ne porte pas lui-même
///
/// Règles :
/// - wifi.ssid : non vide, au plus 32 octets
/// - wifi.password : au plus 63 octets (vide = réseau ouvert, accepté)
/// - binance.coin_list : non vide, aucun symbole vide
/// - binance.update_interval_s : > 0
/// - display.theme : doit nommer un thème connu
/// - display.coin_switch_interval_s : > 0
pub fn validate(config: &SpotterConfig) -> Result<(), ConfigError> {
    if config.wifi.ssid.is_empty() {
        return Err(ConfigError::Invalid("wifi.ssid must not be empty".into()));
    }
    if config.wifi.ssid.len() > SSID_MAX_BYTES {
        return Err(ConfigError::Invalid(format!(
            "wifi.ssid exceeds {} bytes",
            SSID_MAX_BYTES
        )));
    }
    if config.wifi.password.len() > PASSWORD_MAX_BYTES {
        return Err(ConfigError::Invalid(format!(
            "wifi.password exceeds {} bytes",
            PASSWORD_MAX_BYTES
        )));
    }

    if config.binance.coin_list.is_empty() {
        return Err(ConfigError::Invalid(
            "binance.coin_list must list at least one trading pair".into(),
        ));
    }
    if config.binance.coin_list.iter().any(|s| s.is_empty()) {
        return Err(ConfigError::Invalid(
            "binance.coin_list contains an empty symbol".into(),
        ));
    }
    if config.binance.update_interval_s == 0 {
        return Err(ConfigError::Invalid(
            "binance.update_interval_s must be greater than 0".into(),
        ));
    }

    if config.display.theme().is_none() {
        // Liste les thèmes connus dans le message pour aider au diagnostic
        let known: Vec<&str> = Theme::ALL.iter().map(|t| t.label()).collect();
        return Err(ConfigError::Invalid(format!(
            "display.theme '{}' is unknown (known themes: {})",
            config.display.theme,
            known.join(", ")
        )));
    }
    if config.display.coin_switch_interval_s == 0 {
        return Err(ConfigError::Invalid(
            "display.coin_switch_interval_s must be greater than 0".into(),
        ));
    }

    Ok(())
}

// ============================================================================
// Tests unitaires
// ============================================================================
