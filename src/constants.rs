/// DOM hooks the page must provide.
pub const CANVAS_ID: &str = "touchCanvas";
pub const FULLSCREEN_BUTTON_ID: &str = "fullscreenBtn";
pub const REFRESH_BUTTON_ID: &str = "refreshBtn";

// Class toggled on overlay controls the page cannot use
pub const HIDDEN_CLASS: &str = "hidden";
