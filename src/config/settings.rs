pub struct DatabaseSettings {
    pub default_path: &'static str,
    pub path_env_var: &'static str,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            default_path: "swiss_pairings.db",
            path_env_var: "DATABASE_PATH",
        }
    }
}

impl DatabaseSettings {
    /// Database file path, overridable through the environment.
    pub fn resolve_path(&self) -> String {
        std::env::var(self.path_env_var).unwrap_or_else(|_| self.default_path.to_string())
    }
}

pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
        }
    }
}

// Config is passed explicitly (Dependency Injection) rather than through
// globals, so each operation receives exactly the settings it needs.
