use std::rc::Rc;

use anyhow::Context as _;
use feedpost_client::api::{self, Locale, PostData};
use yew::prelude::*;

use crate::{ui, FeedConfig};

const FEED: &str = include_str!("../../feed.json");

pub enum AppMsg {
    SetLocale(Locale),
}

pub struct App {
    config: FeedConfig,
    posts: Result<Rc<Vec<PostData>>, String>,
}

fn load_feed() -> anyhow::Result<Vec<PostData>> {
    api::parse_feed(FEED).context("loading bundled feed")
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = FeedConfig::load();
        tracing::debug!(locale=%config.locale, timezone=%config.timezone, "loaded configuration");
        let posts = match load_feed() {
            Ok(posts) => {
                tracing::info!("loaded {} posts", posts.len());
                Ok(Rc::new(posts))
            }
            Err(e) => {
                tracing::error!("{e:?}");
                Err(format!("{e:#}"))
            }
        };
        App { config, posts }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::SetLocale(locale) => {
                if locale == self.config.locale {
                    return false;
                }
                self.config.set_locale(locale);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let feed = match &self.posts {
            Err(message) => html! {
                <ui::ErrorBanner message={ message.clone() } />
            },
            Ok(posts) => posts
                .iter()
                .map(|post| {
                    html! {
                        <ui::Post
                            key={ post.id.to_string() }
                            author={ post.author.clone() }
                            published_at={ post.published_at }
                            content={ post.content.clone() }
                            config={ self.config }
                        />
                    }
                })
                .collect(),
        };
        html! {
            <div class="container">
                <header class="d-flex justify-content-end">
                    <ui::LocaleMenu
                        current={ self.config.locale }
                        on_select={ ctx.link().callback(AppMsg::SetLocale) }
                    />
                </header>
                <main class="feed">
                    { feed }
                </main>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_feed_loads() {
        let posts = load_feed().unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| !p.content.is_empty()));
    }
}
