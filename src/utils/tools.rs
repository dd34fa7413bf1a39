use log::info;

/// Versions des dépendances cœur, injectées par `build.rs` (`"Unknown"` sinon).
pub fn core_dependencies() -> [(&'static str, &'static str); 2] {
    [
        ("glam", option_env!("GLAM").unwrap_or("Unknown")),
        ("rand", option_env!("RAND").unwrap_or("Unknown")),
    ]
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    // Info système (Rust version, OS)
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependancies");
    for (name, version) in core_dependencies() {
        info!("  {:<4} version: {}", name, version);
    }
}
