// ============================================================================
// Spotter - Inspection de la configuration
// ============================================================================
// Charge le fichier spotter.toml, le valide, et affiche le résumé de la
// config que le firmware utilisera (sans jamais afficher le mot de passe)
//
// CONCEPTS RUST CLÉS :
// 1. Gestion d'erreurs : anyhow::Result au niveau du binaire
// 2. Logging fichier : tracing + rotation quotidienne
// 3. Arguments CLI : std::env::args sans framework (un seul argument)
// ============================================================================

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use spotter::loader;

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging vers fichier
// - Tracing : framework moderne de logging structuré
// - Rotation quotidienne automatique des logs
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// CONCEPT RUST : Tracing subscriber
/// - Registry : point central des logs
/// - Layer : transforme et route les logs
/// - EnvFilter : filtre par niveau (RUST_LOG env var)
/// - RollingFileAppender : rotation automatique
///
/// # Utilisation
/// ```bash
/// # Voir les logs en temps réel
/// tail -f ./logs/spotter.log
///
/// # Contrôler le niveau de log
/// RUST_LOG=debug cargo run
/// RUST_LOG=spotter=trace cargo run
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::PathBuf::from("./logs");

    // Crée le répertoire s'il n'existe pas
    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    // Configure la rotation quotidienne des logs
    // CONCEPT : Log rotation
    // - Rotation::DAILY : nouveau fichier chaque jour
    // - Évite que les logs deviennent trop gros
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "spotter.log");

    // Configure le subscriber (receveur de logs)
    // CONCEPT : Builder pattern avec layers
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender) // Écrit dans le fichier
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true) // Inclut le module (ex: spotter::loader)
                .with_line_number(true), // Inclut le numéro de ligne
        )
        .with(
            // Filtre les logs par niveau
            // - RUST_LOG=debug : tous les logs debug+
            // - Par défaut : debug pour spotter, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spotter=debug,info".into()),
        )
        .init();

    // Premier log : confirme que le logging est initialisé
    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // Initialize logging FIRST
    // - Si init échoue, on affiche l'erreur et continue quand même
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!("Spotter config inspection starting up");

    // Chemin du fichier de config : premier argument CLI, sinon spotter.toml
    // CONCEPT RUST : Iterator sur les arguments
    // - args().nth(0) est le nom du binaire, nth(1) le premier vrai argument
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "spotter.toml".to_string());
    debug!(path = %path, "Resolved config path");

    // Charge et valide la config
    let config = match loader::load(&path) {
        Ok(config) => config,
        Err(e) => {
            error!(path = %path, error = %e, "Failed to load config");
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    info!(
        coins = config.binance.coin_count(),
        theme = %config.display.theme,
        "Config is valid"
    );

    println!("✅ Configuration valide ({})\n", path);
    println!("{}", config.summary());

    Ok(())
}
