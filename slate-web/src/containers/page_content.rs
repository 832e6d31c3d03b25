use yew::{Children, Classes, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PageContentProps {
    #[prop_or_default]
    pub children: Children,

    // Additional classes for the page container
    #[prop_or_default]
    pub class: Classes,
}

/// Card-style container giving every page a consistent frame.
#[function_component(PageContent)]
pub fn page_content(props: &PageContentProps) -> Html {
    let container_classes = classes!(
        "bg-base-100",
        "rounded-box",
        "shadow-sm",
        "border",
        "border-base-300",
        "p-4",
        "md:p-6",
        props.class.clone()
    );

    html! {
        <div class={container_classes}>
            {props.children.clone()}
        </div>
    }
}
