pub const APP_NAME: &str = "cyberlynx";

pub const DEFAULT_PORT: u16 = 8080;

pub const GREETING: &str = "Hello from the CyberLynX API";

pub mod messages {

    pub const USERNAME_TAKEN: &str = "User already exists";

    pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
}
