use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    pub academy: AcademyConfig,
    pub admission: AdmissionConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AcademyConfig {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub logo_url: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdmissionConfig {
    pub session_ttl_minutes: i64,
    /// Simulated latency of the submission stub.
    pub submission_delay_ms: u64,
    /// How long the success overlay stays up before redirecting home.
    pub redirect_delay_secs: u64,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    pub upi_id: String,
    pub payee_name: String,
    pub amount: u32,
    pub currency: String,
    pub qr_service_url: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port as i64)?
            .set_default("server.base_url", defaults.server.base_url)?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", defaults.database.max_connections as i64)?
            .set_default("storage.backend", "sqlite")?
            .set_default("academy.name", defaults.academy.name)?
            .set_default("academy.tagline", defaults.academy.tagline)?
            .set_default("academy.address", defaults.academy.address)?
            .set_default("academy.phone", defaults.academy.phone)?
            .set_default("academy.email", defaults.academy.email)?
            .set_default("academy.logo_url", defaults.academy.logo_url)?
            .set_default("admission.session_ttl_minutes", defaults.admission.session_ttl_minutes)?
            .set_default("admission.submission_delay_ms", defaults.admission.submission_delay_ms as i64)?
            .set_default("admission.redirect_delay_secs", defaults.admission.redirect_delay_secs as i64)?
            .set_default("admission.max_upload_bytes", defaults.admission.max_upload_bytes as i64)?
            .set_default("payment.upi_id", defaults.payment.upi_id)?
            .set_default("payment.payee_name", defaults.payment.payee_name)?
            .set_default("payment.amount", defaults.payment.amount as i64)?
            .set_default("payment.currency", defaults.payment.currency)?
            .set_default("payment.qr_service_url", defaults.payment.qr_service_url)?

            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))

            // Add environment variables (with ACADEMY__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("ACADEMY").separator("__"))

            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                base_url: "http://localhost:8080".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite://academy.db?mode=rwc".to_string(),
                max_connections: 5,
            },
            storage: StorageConfig {
                backend: StorageBackend::Sqlite,
            },
            academy: AcademyConfig {
                name: "Shiv Foundation".to_string(),
                tagline: "Strength Through Discipline".to_string(),
                address: "Narhe, Pune, Maharashtra, India".to_string(),
                phone: "+91 93713 01228".to_string(),
                email: "info@academy.example".to_string(),
                logo_url: "/static/logo.svg".to_string(),
                social_links: Vec::new(),
            },
            admission: AdmissionConfig {
                session_ttl_minutes: 60,
                submission_delay_ms: 2500,
                redirect_delay_secs: 3,
                max_upload_bytes: 20 * 1024 * 1024,
            },
            payment: PaymentConfig {
                upi_id: "academy@upi".to_string(),
                payee_name: "AcademyName".to_string(),
                amount: 500,
                currency: "INR".to_string(),
                qr_service_url: "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=".to_string(),
            },
        }
    }
}

impl AcademyConfig {
    /// WhatsApp chat link built from the digits of the academy phone number.
    pub fn whatsapp_url(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("https://wa.me/{}", digits)
    }
}

impl PaymentConfig {
    /// Deep link understood by UPI payment apps.
    pub fn upi_link(&self) -> String {
        format!(
            "upi://pay?pa={}&pn={}&am={}&cu={}",
            self.upi_id,
            urlencoding::encode(&self.payee_name),
            self.amount,
            self.currency,
        )
    }

    /// Image URL of a QR code encoding [`PaymentConfig::upi_link`].
    pub fn qr_image_url(&self) -> String {
        format!("{}{}", self.qr_service_url, urlencoding::encode(&self.upi_link()))
    }

    pub fn display_amount(&self) -> String {
        format!("{} {}.00", self.currency, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_upi_link() {
        let payment = Settings::default().payment;
        assert_eq!(
            payment.upi_link(),
            "upi://pay?pa=academy@upi&pn=AcademyName&am=500&cu=INR"
        );
    }

    #[test]
    fn test_qr_image_url_encodes_link() {
        let payment = Settings::default().payment;
        let url = payment.qr_image_url();
        assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=upi%3A%2F%2Fpay"));
        assert!(!url.contains("&pn="));
    }

    #[test]
    fn test_whatsapp_url_keeps_digits_only() {
        let academy = Settings::default().academy;
        assert_eq!(academy.whatsapp_url(), "https://wa.me/919371301228");
    }
}
