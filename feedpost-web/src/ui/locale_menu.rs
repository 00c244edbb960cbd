use feedpost_client::api::Locale;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct LocaleMenuProps {
    pub current: Locale,
    pub on_select: Callback<Locale>,
}

fn menu_classes(is_shown: bool) -> Classes {
    classes!("dropdown-menu", "dropdown-menu-dark", "mt-3", is_shown.then_some("show"))
}

fn item_classes(locale: Locale, current: Locale) -> Classes {
    classes!("dropdown-item", (locale == current).then_some("active"))
}

#[function_component(LocaleMenu)]
pub fn locale_menu(p: &LocaleMenuProps) -> Html {
    let is_shown = use_state(|| false);
    let toggle_shown = {
        let is_shown = is_shown.clone();
        Callback::from(move |_| is_shown.set(!*is_shown))
    };
    let items = Locale::ALL.into_iter().map(|l| {
        let on_select = p.on_select.clone();
        let is_shown = is_shown.clone();
        html! {
            <li><a
                class={ item_classes(l, p.current) }
                href="#"
                onclick={ Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    is_shown.set(false);
                    on_select.emit(l);
                }) }
            >
                { l.display_name() }
            </a></li>
        }
    });
    html! {
        <div class="dropdown">
            <button
                type="button"
                class="btn btn-light btn-circle m-3 bi-btn bi-translate fs-6"
                title={ p.current.display_name() }
                aria-expanded={ if *is_shown { "true" } else { "false" } }
                onclick={ toggle_shown }
            >
            </button>
            <ul class={ menu_classes(*is_shown) }>
                { for items }
            </ul>
        </div>
    }
}
