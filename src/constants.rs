// Defaults shared by every list page - single source of truth

// Listing
pub const PAGE_SIZE: usize = 10;
pub const SORT_ASC_INDICATOR: &str = "↑";
pub const SORT_DESC_INDICATOR: &str = "↓";

// Backend used when neither the build nor the host page configures one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
// How long the first mount waits for the host page to call `init_api_config_js`
pub const RUNTIME_CONFIG_WAIT_MS: u32 = 300;
pub const RUNTIME_CONFIG_POLL_MS: u32 = 25;

// Dates
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
pub const DATE_DISPLAY_FORMAT: &str = "%m/%d/%Y";

// Toasts
pub const TOAST_DURATION_MS: u32 = 4000;

// DOM anchors created by `ui::setup`
pub const APP_ROOT_ID: &str = "app-root";
pub const NAV_ID: &str = "main-nav";
pub const PAGE_ROOT_ID: &str = "page-root";
