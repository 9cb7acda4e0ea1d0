use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("spawn failed: {0}")]
    SpawnFailed(String),

    #[error("channel error: {0}")]
    ChannelError(String),

    #[error("watch error: {0}")]
    WatchError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SkiffError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("engine error: {0}")]
    Engine(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("browser.zoom_level out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: browser.zoom_level out of range"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::SpawnFailed("dmenu: No such file or directory".into());
        assert_eq!(
            err.to_string(),
            "spawn failed: dmenu: No such file or directory"
        );

        let err = PlatformError::ChannelError("window 7 has no channels".into());
        assert_eq!(err.to_string(), "channel error: window 7 has no channels");
    }

    #[test]
    fn skiff_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: SkiffError = config_err.into();
        assert!(matches!(err, SkiffError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn skiff_error_from_platform() {
        let platform_err = PlatformError::PathError("no home".into());
        let err: SkiffError = platform_err.into();
        assert!(matches!(err, SkiffError::Platform(_)));
        assert!(err.to_string().contains("no home"));
    }

    #[test]
    fn skiff_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SkiffError = io_err.into();
        assert!(matches!(err, SkiffError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn skiff_error_other_variants() {
        let err = SkiffError::Engine("view gone".into());
        assert_eq!(err.to_string(), "engine error: view gone");

        let err = SkiffError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");

        let err = SkiffError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
