pub(crate) const APP_TITLE: &str = "Go Architect";
pub(crate) const MAIN_WINDOW_LABEL: &str = "main";

pub(crate) const LOG_DIR_NAME: &str = ".goarchitect";
pub(crate) const LOG_FILE_BASENAME: &str = "goarchitect";

pub(crate) const ABOUT_COPYRIGHT: &str = "© 2021 Go Architect";
