use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::errors::{NotifyError, NotifyResult};

/// Appends `name=value` step outputs to the file GitHub Actions names in `$GITHUB_OUTPUT`.
pub struct GithubOutput {
    path: PathBuf,
}

impl GithubOutput {
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }

    pub fn from_env() -> Option<Self> {
        std::env::var(crate::config::constants::GITHUB_OUTPUT_ENV)
            .ok()
            .filter(|path| !path.is_empty())
            .map(|path| Self::new(Path::new(&path)))
    }

    pub fn write(&self, outputs: &[(String, String)]) -> NotifyResult<()> {
        let path = self.path.display().to_string();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| NotifyError::file_error(&path, "open", &e.to_string()))?;

        for (name, value) in outputs {
            writeln!(file, "{}={}", name, value)
                .map_err(|e| NotifyError::file_error(&path, "append", &e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "existing=1\n").unwrap();

        let output = GithubOutput::new(&path);
        output
            .write(&[
                ("webhook_status".to_string(), "sent".to_string()),
                ("slack_status".to_string(), "skipped".to_string()),
            ])
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing=1\nwebhook_status=sent\nslack_status=skipped\n");
    }
}
