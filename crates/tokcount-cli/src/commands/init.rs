use anyhow::Result;
use std::path::Path;
use tokcount_config::Config;

pub fn handle(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Config::default().save_to(path)?;

    println!("✓ Created {}", path.display());
    println!("  Edit [pricing] to override or add model prices");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        handle(&path, false).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.web.port, Config::default().web.port);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_model = \"ada\"\n").unwrap();

        assert!(handle(&path, false).is_err());
        assert_eq!(
            Config::load_from(&path).unwrap().default_model.as_deref(),
            Some("ada")
        );

        handle(&path, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().default_model, None);
    }
}
