// ============================================================================
// Structure : SpotterConfig
// ============================================================================
// Agrégat racine de la configuration du spotter : possède exclusivement
// les trois sous-records (wifi, binance, display)
//
// CONCEPTS RUST :
// 1. Composition : SpotterConfig contient les trois sous-configs par valeur
//    - Ownership en arbre : un seul propriétaire, pas de partage, pas de cycle
// 2. Default : valeurs de repli du firmware quand aucun fichier n'est fourni
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::{BinanceConfig, DisplayConfig, WifiConfig};

/// Configuration complète du spotter
///
/// Peuplée une fois au démarrage par le loader, puis lue en l'état
/// par le reste du firmware (aucune mutation après le boot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotterConfig {
    /// Identifiants du réseau Wi-Fi
    pub wifi: WifiConfig,

    /// Paramètres de polling des prix Binance
    pub binance: BinanceConfig,

    /// Paramètres de l'écran
    pub display: DisplayConfig,
}

impl SpotterConfig {
    /// Constructeur : assemble l'agrégat à partir des trois sous-records
    pub fn new(wifi: WifiConfig, binance: BinanceConfig, display: DisplayConfig) -> Self {
        Self {
            wifi,
            binance,
            display,
        }
    }

    /// Résumé lisible de la config (une ligne par section)
    ///
    /// Le mot de passe Wi-Fi n'apparaît jamais dans le résumé
    pub fn summary(&self) -> String {
        format!(
            "wifi: ssid={} ({})\nbinance: {} coin(s) [{}], refresh {}s\ndisplay: brightness={}, theme={}, switch {}s",
            self.wifi.ssid,
            if self.wifi.is_open() { "open" } else { "wpa" },
            self.binance.coin_count(),
            self.binance.coin_list.join(", "),
            self.binance.update_interval_s,
            self.display.brightness,
            self.display.theme,
            self.display.coin_switch_interval_s,
        )
    }
}

impl Default for SpotterConfig {
    /// Valeurs de repli du firmware (aucun réseau, BTC seul, thème sombre)
    fn default() -> Self {
        Self {
            wifi: WifiConfig::new(String::new(), String::new()),
            binance: BinanceConfig::new(vec!["BTCUSDT".to_string()], 5),
            display: DisplayConfig::new(128, "dark".to_string(), 10),
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Config d'exemple utilisée par plusieurs tests
    fn example_config() -> SpotterConfig {
        SpotterConfig::new(
            WifiConfig::new("home".to_string(), "secret".to_string()),
            BinanceConfig::new(vec!["BTCUSDT".to_string(), "ETHUSDT".to_string()], 5),
            DisplayConfig::new(80, "dark".to_string(), 10),
        )
    }

    #[test]
    fn test_fields_read_back_unchanged() {
        // Fidélité structurelle : chaque champ assigné est relu tel quel,
        // sans troncature ni aliasing entre sous-records
        let config = example_config();

        assert_eq!(config.wifi.ssid, "home");
        assert_eq!(config.wifi.password, "secret");
        assert_eq!(config.binance.coin_list, vec!["BTCUSDT", "ETHUSDT"]);
        assert_eq!(config.binance.coin_count(), 2);
        assert_eq!(config.binance.update_interval_s, 5);
        assert_eq!(config.display.brightness, 80);
        assert_eq!(config.display.theme, "dark");
        assert_eq!(config.display.coin_switch_interval_s, 10);
    }

    #[test]
    fn test_sub_records_do_not_alias() {
        // Modifier un clone ne touche pas l'original
        let config = example_config();
        let mut other = config.clone();
        other.binance.coin_list.push("SOLUSDT".to_string());

        assert_eq!(config.binance.coin_count(), 2);
        assert_eq!(other.binance.coin_count(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let config = example_config();

        let json = serde_json::to_string(&config).unwrap();
        let back: SpotterConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back, config);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = example_config();

        let text = toml::to_string(&config).unwrap();
        let back: SpotterConfig = toml::from_str(&text).unwrap();

        assert_eq!(back, config);
    }

    #[test]
    fn test_default_config_is_valid_shape() {
        let config = SpotterConfig::default();

        assert!(config.wifi.is_open());
        assert_eq!(config.binance.coin_count(), 1);
        assert_eq!(config.display.theme(), Some(crate::models::Theme::Dark));
    }

    #[test]
    fn test_summary_hides_password() {
        let config = example_config();
        let summary = config.summary();

        assert!(summary.contains("ssid=home"));
        assert!(summary.contains("BTCUSDT, ETHUSDT"));
        assert!(!summary.contains("secret"));
    }
}
