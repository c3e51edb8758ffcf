//! Session state shared by all actions
//!
//! A [`Session`] lives for the duration of the process and is passed by
//! reference to every action. Nothing in it is persisted.

use std::path::{Path, PathBuf};

use crate::error::{AsarkitError, Result};

/// Transient state of one asarkit run
#[derive(Debug, Clone)]
pub struct Session {
    install_dir: PathBuf,
    app_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    npm_path: Option<PathBuf>,
    /// Entries found under the last successful extraction destination
    pub extracted_files: Vec<PathBuf>,
}

impl Session {
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            app_path: None,
            output_dir: None,
            npm_path: None,
            extracted_files: Vec::new(),
        }
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn app_path(&self) -> Option<&Path> {
        self.app_path.as_deref()
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn npm_path(&self) -> Option<&Path> {
        self.npm_path.as_deref()
    }

    pub fn set_npm_path(&mut self, path: Option<PathBuf>) {
        self.npm_path = path;
    }

    /// Select the application and derive its output directory
    ///
    /// The output directory is always `install_dir/<file stem of app>`; it has
    /// no setter of its own.
    pub fn select_app(&mut self, app_path: impl Into<PathBuf>) {
        let app_path = app_path.into();
        self.output_dir = Some(derive_output_dir(&self.install_dir, &app_path));
        self.app_path = Some(app_path);
        self.extracted_files.clear();
    }

    /// Selected application, which must exist on disk
    pub fn require_app(&self) -> Result<&Path> {
        let app = self.app_path().ok_or(AsarkitError::NoApplicationSelected)?;
        if !app.exists() {
            return Err(AsarkitError::ApplicationNotFound {
                path: app.display().to_string(),
            });
        }
        Ok(app)
    }

    /// Output directory, which must already exist on disk
    pub fn require_output_dir(&self) -> Result<&Path> {
        let dir = self.output_dir().ok_or(AsarkitError::NoApplicationSelected)?;
        if !dir.is_dir() {
            return Err(AsarkitError::OutputDirMissing {
                path: dir.display().to_string(),
            });
        }
        Ok(dir)
    }

    /// Located npm executable
    pub fn require_npm(&self) -> Result<&Path> {
        self.npm_path().ok_or(AsarkitError::NpmNotFound)
    }
}

/// `install_dir/<stem of app_path>`
pub fn derive_output_dir(install_dir: &Path, app_path: &Path) -> PathBuf {
    let stem = app_path
        .file_stem()
        .map_or_else(|| "app".into(), |s| s.to_os_string());
    install_dir.join(stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_dir_uses_stem() {
        let out = derive_output_dir(Path::new("/opt/asarkit"), Path::new("/apps/Slack/Slack.exe"));
        assert_eq!(out, Path::new("/opt/asarkit").join("Slack"));
    }

    #[test]
    fn test_output_dir_ignores_parent_depth() {
        let install = Path::new("/work");
        let shallow = derive_output_dir(install, Path::new("App.exe"));
        let deep = derive_output_dir(install, Path::new("/a/b/c/d/e/f/App.exe"));
        assert_eq!(shallow, install.join("App"));
        assert_eq!(deep, shallow);
    }

    #[test]
    fn test_output_dir_without_extension() {
        let out = derive_output_dir(Path::new("/work"), Path::new("/usr/lib/code/code"));
        assert_eq!(out, Path::new("/work").join("code"));
    }

    #[test]
    fn test_select_app_sets_output_dir() {
        let mut session = Session::new("/work");
        assert!(session.output_dir().is_none());

        session.select_app("/apps/Discord/Discord.exe");
        assert_eq!(
            session.app_path(),
            Some(Path::new("/apps/Discord/Discord.exe"))
        );
        assert_eq!(
            session.output_dir(),
            Some(Path::new("/work").join("Discord").as_path())
        );
    }

    #[test]
    fn test_reselect_rederives_output_dir() {
        let mut session = Session::new("/work");
        session.select_app("/apps/One.exe");
        session.extracted_files.push(PathBuf::from("/work/One/app/main.js"));
        session.select_app("/apps/Two.exe");

        assert_eq!(
            session.output_dir(),
            Some(Path::new("/work").join("Two").as_path())
        );
        assert!(session.extracted_files.is_empty());
    }

    #[test]
    fn test_require_app_without_selection() {
        let session = Session::new("/work");
        assert!(matches!(
            session.require_app(),
            Err(AsarkitError::NoApplicationSelected)
        ));
    }

    #[test]
    fn test_require_app_missing_on_disk() {
        let temp = TempDir::new().unwrap();
        let mut session = Session::new(temp.path());
        session.select_app(temp.path().join("Missing.exe"));
        assert!(matches!(
            session.require_app(),
            Err(AsarkitError::ApplicationNotFound { .. })
        ));
    }

    #[test]
    fn test_require_output_dir_missing() {
        let temp = TempDir::new().unwrap();
        let mut session = Session::new(temp.path());
        session.select_app(temp.path().join("App.exe"));
        assert!(matches!(
            session.require_output_dir(),
            Err(AsarkitError::OutputDirMissing { .. })
        ));

        std::fs::create_dir_all(temp.path().join("App")).unwrap();
        assert!(session.require_output_dir().is_ok());
    }

    #[test]
    fn test_require_npm() {
        let mut session = Session::new("/work");
        assert!(matches!(
            session.require_npm(),
            Err(AsarkitError::NpmNotFound)
        ));
        session.set_npm_path(Some(PathBuf::from("/usr/bin/npm")));
        assert_eq!(session.require_npm().unwrap(), Path::new("/usr/bin/npm"));
    }
}
