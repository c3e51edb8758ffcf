//! Instructions and about texts

use crate::ui::Console;

pub const INSTRUCTIONS: &str = "\
PREREQUISITES
  1. Install Node.js from https://nodejs.org/
  2. Run as Administrator (Windows) or with sudo (Linux/macOS) to replace archives
  3. Run 'Install required tools' (asarkit install) before first use

STEP-BY-STEP
  1. Select the Electron application's executable
     The output directory <install dir>/<app name> is derived from it
  2. Install required tools
  3. Extract ASAR archive
     Files are extracted to <output dir>/<archive name>/
  4. Analyze source maps, or read the DevTools setup hints
  5. Edit extracted files
     Common files: main.js, renderer.js, index.html, package.json
  6. Recompile & apply changes
     A backup is created once as <archive>.asar.backup
     Restore it with 'Restore original archive' (asarkit restore)

TROUBLESHOOTING
  npm not found       install Node.js, or pass --npm <PATH>
  extraction fails    check that resources/*.asar exists beside the executable
  replacement fails   run with elevated privileges";

pub const ABOUT: &str = concat!(
    "asarkit ",
    env!("CARGO_PKG_VERSION"),
    "\n\n",
    "Extracts, analyzes and repacks Electron applications.\n\n",
    "Features:\n",
    "  ASAR extraction and packing\n",
    "  Source map analysis\n",
    "  File modification support\n",
    "  Automatic backup creation\n\n",
    "Use responsibly."
);

fn log_block(console: &mut Console, text: &str) {
    for line in text.lines() {
        console.info(line);
    }
}

pub fn instructions(console: &mut Console) {
    log_block(console, INSTRUCTIONS);
}

pub fn about(console: &mut Console) {
    log_block(console, ABOUT);
}
