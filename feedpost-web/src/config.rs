use feedpost_client::api::Locale;
use gloo_storage::{LocalStorage, Storage};

use crate::util;

const KEY_LOCALE: &str = "locale";

/// How dates and labels are rendered
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeedConfig {
    pub locale: Locale,
    pub timezone: chrono_tz::Tz,
}

impl FeedConfig {
    pub fn load() -> FeedConfig {
        let stored = match LocalStorage::get::<Locale>(KEY_LOCALE) {
            Ok(l) => Some(l),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                tracing::warn!("ignoring unreadable stored locale: {e:?}");
                None
            }
        };
        FeedConfig::with_stored_locale(stored, util::local_tz())
    }

    fn with_stored_locale(stored: Option<Locale>, timezone: chrono_tz::Tz) -> FeedConfig {
        FeedConfig {
            locale: stored.unwrap_or_default(),
            timezone,
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        if let Err(e) = LocalStorage::set(KEY_LOCALE, locale) {
            tracing::error!("failed saving locale to local storage: {e:?}");
        }
    }
}
