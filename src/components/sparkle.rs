use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SparkleProps {
    pub show: bool,
}

#[function_component]
pub fn Sparkle(props: &SparkleProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <div style="position:fixed; top:50%; left:50%; transform:translate(-50%, -50%); font-size:4rem; z-index:9999; pointer-events:none; text-align:center; width:100%;">
            {"I Love You!!"}
        </div>
    }
}
