use std::{collections::HashMap, fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_bind: String,
    pub asset_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3000".into(),
            asset_dir: "crates/server/public".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("asset_dir") {
                settings.asset_dir = PathBuf::from(v);
            }
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("ASSET_DIR") {
        settings.asset_dir = PathBuf::from(v);
    }

    settings
}
