use chrono::Utc;
use feedpost_client::{
    api::{date, Author, CommentId, ContentBlock, Locale, Time},
    PostState,
};
use yew::prelude::*;

use crate::{ui, util, FeedConfig};

// The relative publication date is refreshed every REFRESH_INTERVAL
const REFRESH_INTERVAL_SECS: i64 = 60;

#[derive(Clone, PartialEq, Properties)]
pub struct PostProps {
    pub author: Author,
    pub published_at: Time,
    pub content: Vec<ContentBlock>,
    pub config: FeedConfig,
}

pub enum PostMsg {
    SubmitComment,
    DraftChanged(String),
    DraftInvalid(Locale),
    DeleteComment(CommentId),
    Refresh,
}

pub struct Post {
    state: PostState,
    draft_ref: NodeRef,
}

fn schedule_refresh(ctx: &Context<Post>) {
    ctx.link().send_future(async {
        util::sleep_for(chrono::Duration::seconds(REFRESH_INTERVAL_SECS)).await;
        PostMsg::Refresh
    });
}

impl Component for Post {
    type Message = PostMsg;
    type Properties = PostProps;

    fn create(ctx: &Context<Self>) -> Self {
        schedule_refresh(ctx);
        Post {
            state: PostState::new(),
            draft_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PostMsg::SubmitComment => {
                self.state.submit_comment();
            }
            PostMsg::DraftChanged(text) => self.state.change_draft(text),
            PostMsg::DraftInvalid(locale) => {
                // The field already carries the message, no need to re-render
                self.state.flag_draft_invalid(locale);
                return false;
            }
            PostMsg::DeleteComment(id) => return self.state.delete_comment(id),
            PostMsg::Refresh => schedule_refresh(ctx),
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(draft) = self.draft_ref.cast::<web_sys::HtmlTextAreaElement>() {
            draft.set_custom_validity(self.state.validation_message().unwrap_or(""));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let locale = p.config.locale;
        let labels = locale.labels();

        // Dates
        let absolute_date = date::format_absolute(p.published_at, locale, p.config.timezone);
        let relative_date =
            date::format_relative(p.published_at, Utc::now(), locale, p.config.timezone);

        // Content
        let content = p.content.iter().enumerate().map(|(i, block)| match block {
            ContentBlock::Paragraph { text } => html! {
                <p key={ i.to_string() }>{ text }</p>
            },
            ContentBlock::Link { text, href } => html! {
                <p key={ i.to_string() }><a href={ href.clone() }>{ text }</a></p>
            },
        });

        // Comment form
        let on_submit = ctx.link().callback(|e: web_sys::SubmitEvent| {
            e.prevent_default();
            PostMsg::SubmitComment
        });
        let on_input = ctx.link().callback(|e: web_sys::InputEvent| {
            let draft: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            draft.set_custom_validity("");
            PostMsg::DraftChanged(draft.value())
        });
        let on_invalid = ctx.link().callback(move |e: web_sys::Event| {
            let draft: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            draft.set_custom_validity(locale.labels().required_field);
            PostMsg::DraftInvalid(locale)
        });

        // Comment list
        let on_delete_comment = ctx.link().callback(PostMsg::DeleteComment);
        let comments = self.state.comments().iter().map(|c| {
            html! {
                <ui::Comment
                    key={ c.id.to_string() }
                    id={ c.id }
                    content={ c.text.clone() }
                    { locale }
                    on_delete_comment={ on_delete_comment.clone() }
                />
            }
        });

        // Put everything together
        html! {
            <article class="post">
                <header class="d-flex align-items-center">
                    <div class="post-author flex-fill d-flex align-items-center">
                        <ui::Avatar has_border={ true } src={ p.author.avatar_url.clone() } />
                        <div class="post-author-info d-flex flex-column">
                            <strong>{ &p.author.name }</strong>
                            <span>{ &p.author.role }</span>
                        </div>
                    </div>
                    <time title={ absolute_date } datetime={ date::format_iso(p.published_at) }>
                        { relative_date }
                    </time>
                </header>

                <div class="post-content">
                    { for content }
                </div>

                <form class="comment-form" onsubmit={ on_submit }>
                    <strong>{ labels.feedback_heading }</strong>
                    <textarea
                        ref={ self.draft_ref.clone() }
                        name="comment"
                        placeholder={ labels.comment_placeholder }
                        value={ self.state.draft().to_string() }
                        oninput={ on_input }
                        oninvalid={ on_invalid }
                        required=true
                    />
                    <footer>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={ self.state.is_submit_disabled() }
                        >
                            { labels.publish }
                        </button>
                    </footer>
                </form>

                <div class="comment-list">
                    { for comments }
                </div>
            </article>
        }
    }
}
