use std::env;
use std::net::SocketAddr;

use chrono::NaiveDate;

use crate::error::AppError;

pub const DEFAULT_GROUP: &str = "7Т1";
pub const DEFAULT_STUDENTS: u32 = 25;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub group: String,
    pub students: u32,
    pub bind_addr: SocketAddr,
    pub seed_demo: bool,
    pub today: Option<NaiveDate>,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let group = lookup("SCHEDULE_GROUP")
            .filter(|g| !g.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GROUP.to_string());

        let students = match lookup("SCHEDULE_STUDENTS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                AppError::BadRequest(format!("SCHEDULE_STUDENTS is not a number: {}", raw))
            })?,
            None => DEFAULT_STUDENTS,
        };

        let bind_addr = lookup("SCHEDULE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse::<SocketAddr>().map_err(|_| {
            AppError::BadRequest(format!("SCHEDULE_BIND_ADDR is not an address: {}", bind_addr))
        })?;

        let seed_demo = match lookup("SCHEDULE_SEED_DEMO").as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "SCHEDULE_SEED_DEMO must be true or false: {}",
                    other
                )));
            }
        };

        let today = match lookup("SCHEDULE_TODAY") {
            Some(raw) if !raw.trim().is_empty() => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                    AppError::BadRequest(format!("SCHEDULE_TODAY is not a YYYY-MM-DD date: {}", raw))
                })?,
            ),
            _ => None,
        };

        Ok(Self {
            group,
            students,
            bind_addr,
            seed_demo,
            today,
        })
    }
}
