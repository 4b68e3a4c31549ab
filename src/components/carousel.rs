use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CarouselProps {
    pub marker: AttrValue,
    pub cards: u32,
}

// Horizontal-only scroller; exercises the left/right edge nudge.
#[function_component]
pub fn Carousel(props: &CarouselProps) -> Html {
    let card_style = "flex:0 0 120px; height:72px; display:flex; align-items:center; justify-content:center; background:#161b22; border:1px solid #30363d; border-radius:8px;";
    html! {
        <div class={classes!(props.marker.to_string())} style="display:flex; gap:8px; padding:8px 14px; overflow-x:auto; overflow-y:hidden; -webkit-overflow-scrolling:touch;">
            { for (1..=props.cards).map(|i| html! {
                <div key={i} style={card_style}>{ format!("Card {}", i) }</div>
            }) }
        </div>
    }
}
