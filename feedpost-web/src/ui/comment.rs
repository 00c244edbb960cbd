use feedpost_client::api::{CommentId, Locale};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentProps {
    pub id: CommentId,
    pub content: String,
    pub locale: Locale,
    pub on_delete_comment: Callback<CommentId>,
}

#[function_component(Comment)]
pub fn comment(p: &CommentProps) -> Html {
    let id = p.id;
    let delete_label = p.locale.labels().delete_comment;
    html! {
        <div class="comment d-flex">
            <div class="comment-box flex-fill">
                <div class="comment-content d-flex align-items-start">
                    <p class="flex-fill">{ &p.content }</p>
                    <button
                        type="button"
                        class="btn bi-btn bi-trash"
                        title={ delete_label }
                        aria-label={ delete_label }
                        onclick={ p.on_delete_comment.reform(move |_| id) }
                    >
                    </button>
                </div>
            </div>
        </div>
    }
}
