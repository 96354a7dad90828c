use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub listen_port: u16,
    pub jobs_file: String,
    pub static_dir: Option<String>,
    //auth
    pub auth_email: String,
    pub auth_password: String,
    pub auth_token: String,
    //client
    pub api_base_url: String,
    pub session_file: String,
    pub page_limit: u32,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("listen_port", 3000)?
            .set_default("jobs_file", "data/jobs.json")?
            .set_default("auth_email", "candidate@test.com")?
            .set_default("auth_password", "interview2024")?
            .set_default("auth_token", "Bearer interview-token-2024")?
            .set_default("api_base_url", "http://localhost:3000")?
            .set_default("session_file", ".jobboard-session.json")?
            .set_default("page_limit", 10)?
            .add_source(Environment::default().try_parsing(true))
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        s.api_base_url = s.api_base_url.trim_end_matches('/').into();
        if s.page_limit == 0 {
            s.page_limit = 10;
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
