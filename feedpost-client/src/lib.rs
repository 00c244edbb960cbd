mod post;
pub use post::{PostState, SEED_COMMENT};

pub mod api {
    pub use feedpost_api::*;
}
