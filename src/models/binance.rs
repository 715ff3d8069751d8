// ============================================================================
// Structure : BinanceConfig
// ============================================================================
// Paramètres du polling des prix sur Binance : quelles paires suivre,
// et à quelle fréquence rafraîchir
//
// CONCEPTS RUST :
// 1. Vec<String> : liste dynamique owned des symboles
//    - Le firmware C d'origine gardait un char** PLUS un compteur
//      num_of_coins séparé, qui pouvaient diverger
//    - En Rust le Vec connaît sa propre longueur : le compteur redondant
//      disparaît, l'incohérence devient impossible
//
// 2. u8 : le firmware cible est contraint en mémoire, l'intervalle de
//    polling reste un petit entier non signé (max 255 secondes)
// ============================================================================

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Paramètres de polling des prix Binance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinanceConfig {
    /// Paires de trading à suivre (ex: ["BTCUSDT", "ETHUSDT"])
    pub coin_list: Vec<String>,

    /// Intervalle de rafraîchissement des prix, en secondes
    pub update_interval_s: u8,
}

impl BinanceConfig {
    /// Constructeur : crée une nouvelle config Binance
    pub fn new(coin_list: Vec<String>, update_interval_s: u8) -> Self {
        Self {
            coin_list,
            update_interval_s,
        }
    }

    /// Nombre de paires suivies
    ///
    /// Remplace le champ num_of_coins du firmware d'origine :
    /// la valeur est dérivée de la liste, jamais stockée à côté
    pub fn coin_count(&self) -> usize {
        self.coin_list.len()
    }

    /// Intervalle de rafraîchissement sous forme de Duration
    ///
    /// CONCEPT RUST : conversion de types
    /// - u8 -> u64 avec "as" (toujours sans perte ici)
    /// - Duration : le type standard pour les durées, accepté par
    ///   les timers du reste du firmware
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_s as u64)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binance_config_creation() {
        let binance = BinanceConfig::new(
            vec!["BTCUSDT".to_string(), "ETHUSDT".to_string()],
            5,
        );

        assert_eq!(binance.coin_list, vec!["BTCUSDT", "ETHUSDT"]);
        assert_eq!(binance.update_interval_s, 5);
    }

    #[test]
    fn test_coin_count_matches_list_length() {
        // Le compteur est toujours cohérent avec la liste,
        // quelle que soit la façon dont elle évolue
        let mut binance = BinanceConfig::new(vec!["BTCUSDT".to_string()], 5);
        assert_eq!(binance.coin_count(), 1);

        binance.coin_list.push("SOLUSDT".to_string());
        assert_eq!(binance.coin_count(), 2);
        assert_eq!(binance.coin_count(), binance.coin_list.len());
    }

    #[test]
    fn test_update_interval_as_duration() {
        let binance = BinanceConfig::new(vec!["BTCUSDT".to_string()], 30);
        assert_eq!(binance.update_interval(), Duration::from_secs(30));
    }
}
