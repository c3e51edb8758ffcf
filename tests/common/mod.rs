//! Common test utilities for asarkit integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Content of every archive created by [`TestWorkspace::with_archives`]
#[allow(dead_code)]
pub const ORIGINAL_ARCHIVE: &str = "ASAR-ORIGINAL";

/// Stand-in for npm: handles `exec -- asar extract|pack`, `install -g`,
/// `ls -g` and `--version`. Set `FAIL_EXTRACT` or `FAIL_PACK` to make the
/// corresponding asar call fail.
#[allow(dead_code)]
const FAKE_NPM: &str = r#"#!/bin/sh
case "$1" in
  exec)
    verb="$4"
    from="$5"
    to="$6"
    case "$verb" in
      extract)
        if [ -n "$FAIL_EXTRACT" ]; then
          echo "Error: invalid archive header" >&2
          exit 1
        fi
        mkdir -p "$to/dist"
        echo '{"name":"demo"}' > "$to/package.json"
        echo 'console.log("demo")' > "$to/dist/main.js"
        echo '{"version":3}' > "$to/dist/main.js.map"
        ;;
      pack)
        if [ -n "$FAIL_PACK" ]; then
          echo "Error: pack exploded" >&2
          exit 1
        fi
        echo "packed" > "$to"
        ls "$from" >> "$to"
        ;;
      *)
        exit 2
        ;;
    esac
    ;;
  install)
    echo "added 1 package"
    ;;
  ls)
    ;;
  --version)
    echo "10.2.4"
    ;;
  *)
    exit 2
    ;;
esac
"#;

/// Temporary install directory, Electron application and fake npm
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Base directory for extracted output
    pub install_dir: PathBuf,
    /// Application executable
    pub app: PathBuf,
    /// npm passed with --npm
    pub npm: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a workspace with an application but no resources directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let install_dir = temp.path().join("asarkit");
        std::fs::create_dir_all(&install_dir).expect("Failed to create install directory");

        let app_dir = temp.path().join("apps").join("Demo");
        std::fs::create_dir_all(&app_dir).expect("Failed to create app directory");
        let app = app_dir.join("Demo");
        std::fs::write(&app, "binary").expect("Failed to write app");

        let npm = temp.path().join("bin").join("npm");
        write_script(&npm, FAKE_NPM);

        Self {
            temp,
            install_dir,
            app,
            npm,
        }
    }

    /// Create a workspace whose application has the given archives
    pub fn with_archives(names: &[&str]) -> Self {
        let workspace = Self::new();
        let resources = workspace.resources();
        std::fs::create_dir_all(&resources).expect("Failed to create resources directory");
        for name in names {
            std::fs::write(resources.join(name), ORIGINAL_ARCHIVE)
                .expect("Failed to write archive");
        }
        workspace
    }

    pub fn resources(&self) -> PathBuf {
        self.app
            .parent()
            .expect("app has a parent")
            .join("resources")
    }

    /// `<install_dir>/<app stem>`
    pub fn output_dir(&self) -> PathBuf {
        self.install_dir.join("Demo")
    }

    pub fn archive(&self, name: &str) -> PathBuf {
        self.resources().join(name)
    }

    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("Failed to read file")
    }

    /// asarkit with the workspace's install dir, npm and no file manager
    pub fn cmd(&self) -> Command {
        let mut cmd = asarkit_cmd();
        cmd.arg("--install-dir")
            .arg(&self.install_dir)
            .arg("--npm")
            .arg(&self.npm)
            .arg("--no-open");
        cmd
    }

    /// Like [`TestWorkspace::cmd`] with the application selected
    pub fn cmd_with_app(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--app").arg(&self.app);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The real asarkit binary with no configuration from the environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn asarkit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("asarkit").expect("asarkit binary is built");
    for var in [
        "ASARKIT_INSTALL_DIR",
        "ASARKIT_APP",
        "ASARKIT_NPM",
        "ASARKIT_NO_OPEN",
        "FAIL_EXTRACT",
        "FAIL_PACK",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn write_script(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create script directory");
    }
    std::fs::write(path, content).expect("Failed to write script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = std::fs::metadata(path)
            .expect("Failed to stat script")
            .permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(path, permissions).expect("Failed to chmod script");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_layout() {
        let workspace = TestWorkspace::with_archives(&["app.asar"]);
        assert!(workspace.app.is_file());
        assert!(workspace.npm.is_file());
        assert_eq!(workspace.read(&workspace.archive("app.asar")), ORIGINAL_ARCHIVE);
        assert!(!workspace.output_dir().exists());
    }
}
