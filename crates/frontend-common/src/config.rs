//! Frontend configuration

/// Application shell configuration
pub struct ShellConfig;

impl ShellConfig {
    /// localStorage key holding the serialized session record
    pub const SESSION_STORAGE_KEY: &'static str = "cryptoclick_user";

    /// Product name shown next to the logo
    pub const BRAND_NAME: &'static str = "Meowtrade";

    /// Shown in the user badge when the session carries no usable name
    pub const FALLBACK_USER_NAME: &'static str = "User";

    /// Width constraint applied to the page content container
    pub const CONTENT_MAX_WIDTH_CLASS: &'static str = "max-w-[1400px]";
}
