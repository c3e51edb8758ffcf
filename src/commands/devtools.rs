//! DevTools setup hints

use crate::ui::Console;

const STEPS: [&str; 4] = [
    "1. Extract the ASAR archive",
    "2. Modify main.js to enable DevTools",
    "3. Add: mainWindow.webContents.openDevTools()",
    "4. Recompile the changes",
];

pub fn run(console: &mut Console) {
    console.info("Development tools setup instructions:");
    for step in STEPS {
        console.info(step);
    }
}
