// ============================================================================
// Structure : WifiConfig
// ============================================================================
// Identifiants du réseau Wi-Fi auquel le spotter se connecte au démarrage
//
// CONCEPTS RUST :
// 1. String vs &str :
//    - String : owned string (possède la mémoire, heap allocated)
//    - &str : borrowed string slice (référence, ne possède pas)
//    - On utilise String ici car la config possède ses données
//    (dans le firmware C d'origine c'étaient des char* non bornés)
//
// 2. #[serde(default)] : champ optionnel à la désérialisation
//    - Un réseau ouvert peut simplement omettre "password"
// ============================================================================

use serde::{Deserialize, Serialize};

/// Identifiants Wi-Fi du spotter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiConfig {
    /// Nom du réseau (ex: "home")
    pub ssid: String,

    /// Mot de passe WPA (vide = réseau ouvert)
    #[serde(default)]
    pub password: String,
}

impl WifiConfig {
    /// Constructeur : crée une nouvelle config Wi-Fi
    ///
    /// CONCEPT RUST : Ownership
    /// - Les paramètres String sont "moved" dans la fonction
    /// - WifiConfig devient le nouveau propriétaire de ces Strings
    pub fn new(ssid: String, password: String) -> Self {
        Self { ssid, password }
    }

    /// Retourne true si le réseau est ouvert (pas de mot de passe)
    pub fn is_open(&self) -> bool {
        self.password.is_empty()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wifi_config_creation() {
        let wifi = WifiConfig::new("home".to_string(), "secret".to_string());

        assert_eq!(wifi.ssid, "home");
        assert_eq!(wifi.password, "secret");
        assert!(!wifi.is_open());
    }

    #[test]
    fn test_wifi_config_open_network() {
        let wifi = WifiConfig::new("cafe-guest".to_string(), String::new());
        assert!(wifi.is_open());
    }

    #[test]
    fn test_wifi_config_password_optional_in_toml() {
        // Un réseau ouvert peut omettre complètement le mot de passe
        let wifi: WifiConfig = toml::from_str("ssid = \"cafe-guest\"").unwrap();

        assert_eq!(wifi.ssid, "cafe-guest");
        assert!(wifi.is_open());
    }
}
