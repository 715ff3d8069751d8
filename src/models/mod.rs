// ============================================================================
// Module : models
// ============================================================================
// Ce module contient les structures de données de la configuration
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod binance; // Déclaration du module binance (fichier binance.rs)
pub mod display; // Déclaration du module display (fichier display.rs)
pub mod spotter; // Déclaration du module spotter (fichier spotter.rs)
pub mod wifi;    // Déclaration du module wifi (fichier wifi.rs)

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use spotter::models::wifi::WifiConfig;
// On peut faire : use spotter::models::WifiConfig;
pub use binance::BinanceConfig;
pub use display::{DisplayConfig, Theme};
pub use spotter::SpotterConfig;
pub use wifi::WifiConfig;
