use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ErrorBannerProps {
    pub message: String,
}

#[function_component(ErrorBanner)]
pub fn error_banner(p: &ErrorBannerProps) -> Html {
    html! {
        <div class="error-banner d-flex align-items-center" role="alert">
            <span class="bi-exclamation-triangle m-2" aria-hidden="true"></span>
            <div>{ &p.message }</div>
        </div>
    }
}
