use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedListProps {
    /// Scrollable marker class.
    pub marker: AttrValue,
    pub rows: u32,
}

#[function_component]
pub fn FeedList(props: &FeedListProps) -> Html {
    let row_style = "display:flex; justify-content:space-between; padding:12px 14px; border-bottom:1px solid #21262d;";
    html! {
        <div class={classes!(props.marker.to_string())} style="flex:1; min-height:0; overflow-y:auto; -webkit-overflow-scrolling:touch;">
            { for (1..=props.rows).map(|i| html! {
                <div key={i} style={row_style}>
                    <span>{ format!("Item {}", i) }</span>
                    <span style="opacity:0.6;">{ format!("#{:03}", i) }</span>
                </div>
            }) }
        </div>
    }
}
