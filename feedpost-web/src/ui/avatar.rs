use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AvatarProps {
    pub src: String,
    #[prop_or(true)]
    pub has_border: bool,
}

#[function_component(Avatar)]
pub fn avatar(p: &AvatarProps) -> Html {
    let class = match p.has_border {
        true => "avatar-with-border",
        false => "avatar",
    };
    html! {
        <img class={ class } src={ p.src.clone() } alt="" />
    }
}
