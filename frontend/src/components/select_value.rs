use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Keep a `<select>` showing `value`.
///
/// The `selected` attribute on an option stops tracking the control once the
/// user has picked an option by hand, so after each change of `value` it is
/// also written to the element's `value` property. Attach the returned ref to
/// the select.
#[hook]
pub fn use_select_value(value: String) -> NodeRef {
    let select_ref = use_node_ref();

    {
        let select_ref = select_ref.clone();
        use_effect_with(value, move |value| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(value);
            }
        });
    }

    select_ref
}
