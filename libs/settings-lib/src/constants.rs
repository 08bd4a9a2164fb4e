// Environment variables read at load time

pub const DATABASE_URL_OVERRIDE: &str = "SQLALCHEMY_DATABASE_URI";

// Database credential parts
pub const POSTGRES_HOST: &str = "POSTGRES_URL";
pub const POSTGRES_USER: &str = "POSTGRES_USER";
pub const POSTGRES_PASSWORD: &str = "POSTGRES_PW";
pub const POSTGRES_DB: &str = "POSTGRES_DB";

pub const CONFERENCE_ID: &str = "CONFERENCE_ID";
pub const SECRET_KEY: &str = "SECRET_KEY";

// Message queue
pub const SERVICE_BUS_CONNECTION_STRING: &str = "SERVICE_BUS_CONNECTION_STRING";
pub const SERVICE_BUS_QUEUE_NAME: &str = "SERVICE_BUS_QUEUE_NAME";

// Notifications
pub const ADMIN_EMAIL_ADDRESS: &str = "ADMIN_EMAIL_ADDRESS";
pub const SENDGRID_API_KEY: &str = "SENDGRID_API_KEY";

// Defaults for non-secret fields
pub const DEFAULT_POSTGRES_HOST: &str = "localhost";
pub const DEFAULT_POSTGRES_DB: &str = "techconfdb";
pub const DEFAULT_CONFERENCE_ID: u32 = 1;
pub const DEFAULT_QUEUE_NAME: &str = "notificationqueue";
pub const DEFAULT_ADMIN_EMAIL: &str = "info@techconf.com";

pub const DATABASE_SCHEME: &str = "postgresql";
