//! Target sizes and destination directories for the HomeBrewAssistant
//! asset catalogs. Pure data; the orchestrator walks these in order.

/// App-icon destination, relative to the working directory.
pub const APP_ICON_DIR: &str = "HomeBrewAssistant/Assets.xcassets/AppIcon.appiconset";

/// Splash-logo destination, relative to the working directory.
pub const SPLASH_LOGO_DIR: &str = "HomeBrewAssistant/Assets.xcassets/BeerBrewingLogo.imageset";

/// iPhone notification/settings/spotlight/app icons at 2x/3x plus the
/// App Store listing icon. Pixel edge length first, then filename.
pub const APP_ICON_SIZES: &[(u32, &str)] = &[
    (40, "iPhone-20@2x.png"),
    (60, "iPhone-20@3x.png"),
    (58, "iPhone-29@2x.png"),
    (87, "iPhone-29@3x.png"),
    (80, "iPhone-40@2x.png"),
    (120, "iPhone-40@3x.png"),
    (120, "iPhone-60@2x.png"),
    (180, "iPhone-60@3x.png"),
    (1024, "AppStore-1024.png"),
];

/// Launch-screen logo at 1x/2x/3x.
pub const SPLASH_LOGO_SIZES: &[(u32, &str)] = &[
    (120, "beer-brewing-logo@1x.png"),
    (240, "beer-brewing-logo@2x.png"),
    (360, "beer-brewing-logo@3x.png"),
];
