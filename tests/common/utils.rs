use std::path::PathBuf;

pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    let path: PathBuf = base.join("tests").join("fixtures").join(name);
    path.display().to_string()
}

/// Fresh scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("field_delegate_{}", name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
