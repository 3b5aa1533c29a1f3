/// Application name
pub const APP_NAME: &str = "driver-loader";

/// Application version
pub const APP_VERSION: &str = "0.1.0";

/// Key pattern under which driver descriptors are grouped in the store
pub const DEFAULT_KEY_PATTERN: &str = "plugin-driver:*";

/// Directive token selecting every driver code
pub const SYMBOL_STAR: &str = "*";

/// Separator between driver code and pinned version
pub const SYMBOL_AT: char = '@';

/// Separator between directive tokens
pub const SYMBOL_COMMA: char = ',';

/// Environment variable overriding the run mode
pub const ENV_RUN_MODE: &str = "DRIVER_LOADER_RUN_MODE";

/// Environment variable overriding the store type
pub const ENV_STORE_TYPE: &str = "DRIVER_LOADER_STORE_TYPE";

/// Environment variable overriding the init-load directive
pub const ENV_INIT_LOAD: &str = "DRIVER_LOADER_INIT_LOAD";

/// Environment variable toggling strict install mode
pub const ENV_STRICT: &str = "DRIVER_LOADER_STRICT";

/// Default page size for paged session queries
pub const DEFAULT_PAGE_SIZE: usize = 20;
