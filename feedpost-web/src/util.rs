use std::str::FromStr;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let name = get_timezone();
        parse_tz(&name).unwrap_or_else(|| {
            tracing::warn!("host js timezone {name:?} is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

fn parse_tz(name: &str) -> Option<chrono_tz::Tz> {
    chrono_tz::Tz::from_str(name).ok()
}

pub async fn sleep_for(d: chrono::Duration) {
    let d = d.to_std().unwrap_or(std::time::Duration::from_secs(0));
    if let Err(e) = wasm_timer::Delay::new(d).await {
        tracing::error!("failed sleeping: {e:?}");
    }
}
