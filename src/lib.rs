// ============================================================================
// Spotter - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod loader; // Chargement et validation du fichier de configuration
pub mod models; // Structures de données de la configuration
