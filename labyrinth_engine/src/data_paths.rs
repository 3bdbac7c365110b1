use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    let exe_dir = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf));
    candidate_roots(exe_dir.as_deref())
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("labyrinth_engine/data"))
}

/// Directories searched for data, most specific first.
fn candidate_roots(exe_dir: Option<&Path>) -> Vec<PathBuf> {
    // workspace root and flattened `data/`
    let mut candidates = vec![PathBuf::from("labyrinth_engine/data"), PathBuf::from("data")];

    if let Some(dir) = exe_dir {
        candidates.push(dir.join("labyrinth_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("labyrinth_engine/data"));
            candidates.push(parent.join("data"));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executable_dirs_follow_working_dir_candidates() {
        let roots = candidate_roots(Some(Path::new("/opt/labyrinth/bin")));
        assert_eq!(roots[0], PathBuf::from("labyrinth_engine/data"));
        assert_eq!(roots[3], PathBuf::from("/opt/labyrinth/bin/data"));
        assert_eq!(roots.last(), Some(&PathBuf::from("/opt/labyrinth/data")));
    }

    #[test]
    fn without_executable_only_relative_candidates() {
        assert_eq!(candidate_roots(None).len(), 2);
    }
}
