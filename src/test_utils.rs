#[cfg(test)]
pub mod fixtures {
    use crate::discovery::FileCandidate;
    use std::fs;
    use tempfile::TempDir;

    /// Create a temporary tree from `(relative path, content)` pairs.
    pub fn create_tree(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (path, content) in files {
            let full = dir.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }
        dir
    }

    pub fn relative_paths(candidates: &[FileCandidate]) -> Vec<String> {
        candidates
            .iter()
            .map(|c| c.relative_path().to_string_lossy().replace('\\', "/"))
            .collect()
    }
}
