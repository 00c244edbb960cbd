mod app;
pub use app::App;

mod avatar;
pub use avatar::Avatar;

mod comment;
pub use comment::Comment;

mod error_banner;
pub use error_banner::ErrorBanner;

mod locale_menu;
pub use locale_menu::LocaleMenu;

mod post;
pub use post::Post;
