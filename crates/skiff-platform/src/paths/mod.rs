mod ensure;
mod resolve;

pub(crate) use ensure::create_private_dir;
pub use ensure::{build_path, ensure_dirs};
pub use resolve::{absolutize, channel_root, config_dir, expand_home, process_channel_root};

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn config_dir_ends_with_skiff() {
        let path = config_dir().unwrap();
        assert!(
            path.ends_with("skiff"),
            "config_dir should end with 'skiff', got: {path:?}"
        );
    }

    #[test]
    fn channel_root_mentions_skiff() {
        let root = channel_root();
        let name = root.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("skiff"), "got: {root:?}");
    }

    #[test]
    fn process_channel_root_is_scoped_by_pid() {
        let root = process_channel_root();
        assert_eq!(root.parent(), Some(channel_root().as_path()));
        assert_eq!(
            root.file_name().and_then(|n| n.to_str()),
            Some(std::process::id().to_string().as_str())
        );
    }

    #[test]
    fn expand_home_replaces_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_home("~").unwrap(), home);
        assert_eq!(expand_home("~/a/b.txt").unwrap(), home.join("a/b.txt"));
    }

    #[test]
    fn expand_home_leaves_other_paths() {
        assert_eq!(expand_home("/etc/x").unwrap(), std::path::PathBuf::from("/etc/x"));
        assert_eq!(expand_home("rel/~x").unwrap(), std::path::PathBuf::from("rel/~x"));
        assert_eq!(expand_home("~user/x").unwrap(), std::path::PathBuf::from("~user/x"));
    }

    #[test]
    fn absolutize_keeps_absolute() {
        let p = std::path::Path::new("/tmp/x");
        assert_eq!(absolutize(p).unwrap(), p);
        assert!(absolutize(std::path::Path::new("x")).unwrap().is_absolute());
    }

    #[test]
    fn build_path_creates_private_file_and_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deeper/cookies.txt");

        let built = build_path(target.to_str().unwrap()).unwrap();
        assert_eq!(built, target);
        assert!(built.is_file());

        let file_mode = std::fs::metadata(&built).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, 0o600);
        let dir_mode = std::fs::metadata(built.parent().unwrap())
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(dir_mode, 0o700);
    }

    #[test]
    fn build_path_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("history.txt");
        std::fs::write(&target, "h: https://example.org\n").unwrap();

        build_path(target.to_str().unwrap()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&target).unwrap(),
            "h: https://example.org\n"
        );
    }
}
