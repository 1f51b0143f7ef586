// Settings service module
// Reads and writes the TOML settings file

mod service;

pub use service::{default_path, SettingsService};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{AssignMode, Settings};
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join("settings.toml"));

        let settings = Settings {
            update_on_create: true,
            assign_mode: AssignMode::Single,
            ..Settings::default()
        };
        service.save(&settings).unwrap();

        let loaded = service.load().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_or_default_when_missing() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("missing.toml"));
        assert_eq!(service.load_or_default(), Settings::default());
    }

    #[test]
    fn test_load_or_default_when_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "placeholder_text = [").unwrap();
        let service = SettingsService::new(&path);
        assert!(service.load().is_err());
        assert_eq!(service.load_or_default(), Settings::default());
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        let settings = Settings {
            window_height: 10.0,
            ..Settings::default()
        };
        assert!(service.save(&settings).is_err());
        assert!(!service.path().exists());
    }
}
