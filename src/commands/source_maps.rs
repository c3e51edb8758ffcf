//! Source map listing

use super::App;
use crate::error::Result;
use crate::sourcemap;

/// List the source maps under the output directory
pub fn run(app: &mut App) -> Result<()> {
    let output_dir = app.session.require_output_dir()?.to_path_buf();
    sourcemap::scan(&output_dir, &mut app.console);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Fixture;
    use crate::error::AsarkitError;
    use crate::process::testing::FakeRunner;

    #[test]
    fn test_requires_extracted_output() {
        let fx = Fixture::new(&["app.asar"]);
        let mut app = fx.ready_app(FakeRunner::succeeding());

        assert!(matches!(
            run(&mut app),
            Err(AsarkitError::OutputDirMissing { .. })
        ));
    }

    #[test]
    fn test_lists_maps() {
        let fx = Fixture::new(&["app.asar"]);
        let mut app = fx.ready_app(FakeRunner::succeeding());
        let dist = fx.output_dir().join("app/dist");
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("main.js.map"), "{}").unwrap();

        run(&mut app).unwrap();
        assert!(app.console.contains("app/dist/main.js.map"));
    }
}
