//! Batch orchestration: validate the source once, then walk both size
//! tables in order. A failed output is reported and skipped, never fatal.

use std::fs;
use std::path::Path;

use crate::error::ConvertError;
use crate::resize;
use crate::sizes::{APP_ICON_DIR, APP_ICON_SIZES, SPLASH_LOGO_DIR, SPLASH_LOGO_SIZES};

pub fn convert_logo(logo: &Path) -> Result<(), ConvertError> {
    if !logo.is_file() {
        return Err(ConvertError::MissingSource(logo.to_path_buf()));
    }

    let icon_dir = Path::new(APP_ICON_DIR);
    let splash_dir = Path::new(SPLASH_LOGO_DIR);
    fs::create_dir_all(icon_dir)?;
    fs::create_dir_all(splash_dir)?;

    println!("Creating app icons:");
    for &(size, name) in APP_ICON_SIZES {
        let output = icon_dir.join(name);
        match resize::app_icon(logo, &output, size) {
            Ok(()) => println!("  App icon: {} ({size}x{size})", output.display()),
            Err(e) => println!("  Error: {e}"),
        }
    }

    println!("\nCreating splash logos:");
    for &(size, name) in SPLASH_LOGO_SIZES {
        let output = splash_dir.join(name);
        match resize::splash_logo(logo, &output, size) {
            Ok(()) => println!("  Splash logo: {} ({size}x{size})", output.display()),
            Err(e) => println!("  Error: {e}"),
        }
    }

    println!("\nLogo conversion complete");
    Ok(())
}
