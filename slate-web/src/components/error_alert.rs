use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    /// User-facing message describing what failed.
    pub message: AttrValue,
}

/// Inline error banner for failed API calls.
///
/// Failures render where they happened; the rest of the page keeps whatever
/// it already loaded.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="alert alert-error">
            <span>{ props.message.clone() }</span>
        </div>
    }
}
