// ============================================================================
// Structure : DisplayConfig
// ============================================================================
// Paramètres de l'écran du spotter : luminosité, thème de couleurs,
// et rythme de rotation entre les coins affichés
//
// CONCEPTS RUST :
// 1. Enums pour les valeurs fermées : Theme énumère les thèmes connus
//    - Le champ theme reste une String (c'est ce que le fichier de
//      config contient), le loader vérifie qu'elle nomme un Theme
// 2. u8 pour la luminosité : plage matérielle du panneau (0-255)
// ============================================================================

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Thèmes d'affichage connus du firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    /// Texte clair sur fond sombre (défaut)
    Dark,
    /// Texte sombre sur fond clair
    Light,
    /// Vert sur noir, façon terminal
    Matrix,
}

impl Theme {
    /// Tous les thèmes reconnus (utilisé par la validation et les messages d'erreur)
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Matrix];

    /// Retourne l'identifiant texte du thème (celui du fichier de config)
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Matrix => "matrix",
        }
    }

    /// Résout un identifiant texte vers un thème connu
    ///
    /// CONCEPT RUST : Option<T>
    /// - Some(theme) : l'identifiant est connu
    /// - None : thème inconnu (au loader de décider quoi en faire)
    pub fn from_name(name: &str) -> Option<Theme> {
        Theme::ALL.iter().copied().find(|t| t.label() == name)
    }
}

/// Paramètres d'affichage du spotter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Luminosité du panneau (0-255, plage matérielle)
    pub brightness: u8,

    /// Identifiant du thème (ex: "dark"), validé par le loader
    pub theme: String,

    /// Durée d'affichage de chaque coin avant rotation, en secondes
    pub coin_switch_interval_s: u8,
}

impl DisplayConfig {
    /// Constructeur : crée une nouvelle config d'affichage
    pub fn new(brightness: u8, theme: String, coin_switch_interval_s: u8) -> Self {
        Self {
            brightness,
            theme,
            coin_switch_interval_s,
        }
    }

    /// Résout le champ theme vers un thème connu (None si inconnu)
    pub fn theme(&self) -> Option<Theme> {
        Theme::from_name(&self.theme)
    }

    /// Durée d'affichage de chaque coin sous forme de Duration
    pub fn coin_switch_interval(&self) -> Duration {
        Duration::from_secs(self.coin_switch_interval_s as u64)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config_creation() {
        let display = DisplayConfig::new(80, "dark".to_string(), 10);

        assert_eq!(display.brightness, 80);
        assert_eq!(display.theme, "dark");
        assert_eq!(display.coin_switch_interval_s, 10);
    }

    #[test]
    fn test_theme_resolution() {
        let display = DisplayConfig::new(80, "matrix".to_string(), 10);
        assert_eq!(display.theme(), Some(Theme::Matrix));

        let unknown = DisplayConfig::new(80, "solarized".to_string(), 10);
        assert_eq!(unknown.theme(), None);
    }

    #[test]
    fn test_theme_labels_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.label()), Some(theme));
        }
    }

    #[test]
    fn test_coin_switch_interval_as_duration() {
        let display = DisplayConfig::new(80, "dark".to_string(), 10);
        assert_eq!(display.coin_switch_interval(), Duration::from_secs(10));
    }
}
