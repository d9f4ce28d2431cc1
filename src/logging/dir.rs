use std::path::Path;

use eyre::Context;

pub const ERROR_LOG_FILE: &str = "error.log";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const GITIGNORE_CONTENT: &str = "*.log";

/// Makes sure `dir` exists. A freshly created directory is seeded with a
/// `.gitignore` that keeps the generated log files out of version control.
///
/// Returns `true` when the directory had to be created. An existing
/// directory is left untouched, even if it has no `.gitignore`.
pub fn ensure_log_dir(dir: impl AsRef<Path>) -> eyre::Result<bool> {
    let dir = dir.as_ref();
    if dir.exists() {
        return Ok(false);
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed creating log directory {}", dir.display()))?;

    let gitignore = dir.join(GITIGNORE_FILE);
    std::fs::write(&gitignore, GITIGNORE_CONTENT)
        .with_context(|| format!("Failed writing {}", gitignore.display()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_dir_with_gitignore() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("logs");

        assert!(ensure_log_dir(&dir).unwrap());
        assert!(dir.is_dir());
        assert_eq!(
            std::fs::read_to_string(dir.join(GITIGNORE_FILE)).unwrap(),
            "*.log"
        );
    }

    #[test]
    fn second_call_is_a_no_op() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("logs");

        ensure_log_dir(&dir).unwrap();
        std::fs::write(dir.join(GITIGNORE_FILE), "edited").unwrap();

        assert!(!ensure_log_dir(&dir).unwrap());
        assert_eq!(
            std::fs::read_to_string(dir.join(GITIGNORE_FILE)).unwrap(),
            "edited"
        );
    }

    #[test]
    fn existing_dir_is_not_seeded() {
        let root = tempfile::tempdir().unwrap();

        assert!(!ensure_log_dir(root.path()).unwrap());
        assert!(!root.path().join(GITIGNORE_FILE).exists());
    }

    #[test]
    fn fails_when_path_is_blocked_by_a_file() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        assert!(ensure_log_dir(blocker.join("logs")).is_err());
    }
}
