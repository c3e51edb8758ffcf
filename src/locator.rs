//! npm discovery
//!
//! Candidates are evaluated in a fixed priority order and the first path that
//! exists wins: the search-path hit first, then the OS-conventional install
//! locations.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::discovery::glob_files;
use crate::process::find_in_path;

/// Which family of conventional locations to search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFamily {
    Windows,
    Unix,
}

impl SearchFamily {
    /// Family of the running system
    pub fn current() -> Self {
        if cfg!(windows) {
            SearchFamily::Windows
        } else {
            SearchFamily::Unix
        }
    }

    fn executable_names(self) -> &'static [&'static str] {
        match self {
            SearchFamily::Windows => &["npm.cmd", "npm.exe", "npm"],
            SearchFamily::Unix => &["npm"],
        }
    }
}

/// Ordered npm candidates for `family`
///
/// `path_var` is the value of `PATH` and `home` the user's home directory.
pub fn npm_candidates(
    family: SearchFamily,
    path_var: Option<&OsStr>,
    home: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(hit) = find_in_path(path_var, family.executable_names()) {
        candidates.push(hit);
    }

    match family {
        SearchFamily::Windows => {
            candidates.push(PathBuf::from(r"C:\Program Files\nodejs\npm.cmd"));
            candidates.push(PathBuf::from(r"C:\Program Files (x86)\nodejs\npm.cmd"));
            if let Some(home) = home {
                candidates.push(
                    home.join("AppData")
                        .join("Roaming")
                        .join("npm")
                        .join("npm.cmd"),
                );
            }
        }
        SearchFamily::Unix => {
            candidates.push(PathBuf::from("/usr/local/bin/npm"));
            candidates.push(PathBuf::from("/usr/bin/npm"));
            if let Some(home) = home {
                let nvm_root = home.join(".nvm").join("versions").join("node");
                let mut installs = glob_files(&nvm_root, "*/bin/npm", Some(3));
                installs.sort_by(|a, b| {
                    nvm_version(b)
                        .cmp(&nvm_version(a))
                        .then_with(|| a.cmp(b))
                });
                candidates.extend(installs);
            }
        }
    }

    candidates
}

/// Node version of an nvm install, from `<version>/bin/npm`
///
/// Directory names look like `v20.11.0`; anything else sorts as `None`.
fn nvm_version(npm: &Path) -> Option<(u64, u64, u64)> {
    let name = npm.parent()?.parent()?.file_name()?.to_str()?;
    let mut parts = name.strip_prefix('v')?.splitn(3, '.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    Some((major, minor, patch))
}

/// First candidate that exists on disk
pub fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|c| c.exists()).cloned()
}

/// Locate npm on the running system
pub fn locate_npm() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH");
    let home = dirs::home_dir();
    let candidates = npm_candidates(
        SearchFamily::current(),
        path_var.as_deref(),
        home.as_deref(),
    );
    first_existing(&candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Empty executable file
    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn test_first_existing_respects_order() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a/npm");
        let b = temp.path().join("b/npm");
        let c = temp.path().join("c/npm");
        touch(&b);
        touch(&c);

        let found = first_existing(&[a, b.clone(), c]);
        assert_eq!(found, Some(b));
    }

    #[test]
    fn test_first_existing_none() {
        let temp = TempDir::new().unwrap();
        let candidates = vec![temp.path().join("x/npm"), temp.path().join("y/npm")];
        assert_eq!(first_existing(&candidates), None);
        assert_eq!(first_existing(&[]), None);
    }

    #[test]
    fn test_path_hit_comes_first() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        touch(&bin.join("npm"));
        let path_var = std::env::join_paths([&bin]).unwrap();

        let candidates = npm_candidates(SearchFamily::Unix, Some(&path_var), None);
        assert_eq!(candidates[0], bin.join("npm"));
        assert_eq!(candidates[1], PathBuf::from("/usr/local/bin/npm"));
        assert_eq!(candidates[2], PathBuf::from("/usr/bin/npm"));
    }

    #[test]
    fn test_unix_candidates_without_path_hit() {
        let temp = TempDir::new().unwrap();
        let path_var = std::env::join_paths([temp.path()]).unwrap();
        let candidates = npm_candidates(SearchFamily::Unix, Some(&path_var), None);
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/usr/local/bin/npm"),
                PathBuf::from("/usr/bin/npm")
            ]
        );
    }

    #[test]
    fn test_nvm_versions_newest_first() {
        let home = TempDir::new().unwrap();
        let nvm = home.path().join(".nvm/versions/node");
        touch(&nvm.join("v9.11.2/bin/npm"));
        touch(&nvm.join("v20.11.0/bin/npm"));
        touch(&nvm.join("v18.19.0/bin/npm"));
        touch(&nvm.join("system/bin/npm"));

        let candidates = npm_candidates(SearchFamily::Unix, None, Some(home.path()));
        assert_eq!(
            candidates[2..],
            [
                nvm.join("v20.11.0/bin/npm"),
                nvm.join("v18.19.0/bin/npm"),
                nvm.join("v9.11.2/bin/npm"),
                nvm.join("system/bin/npm"),
            ]
        );
    }

    #[test]
    fn test_nvm_version_parsing() {
        assert_eq!(
            nvm_version(Path::new("/n/v20.11.0/bin/npm")),
            Some((20, 11, 0))
        );
        assert_eq!(nvm_version(Path::new("/n/system/bin/npm")), None);
        assert_eq!(nvm_version(Path::new("npm")), None);
    }

    #[test]
    fn test_windows_candidates_order() {
        let home = Path::new("/home/someone");
        let candidates = npm_candidates(SearchFamily::Windows, None, Some(home));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from(r"C:\Program Files\nodejs\npm.cmd"),
                PathBuf::from(r"C:\Program Files (x86)\nodejs\npm.cmd"),
                home.join("AppData").join("Roaming").join("npm").join("npm.cmd"),
            ]
        );
    }

    #[test]
    fn test_windows_path_hit_prefers_cmd() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("npm"));
        touch(&temp.path().join("npm.cmd"));
        let path_var = std::env::join_paths([temp.path()]).unwrap();

        let candidates = npm_candidates(SearchFamily::Windows, Some(&path_var), None);
        assert_eq!(candidates[0], temp.path().join("npm.cmd"));
    }
}
