use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

/// Inline, dismissible message banner.
#[component]
pub fn AlertBanner(
    kind: AlertKind,
    message: String,
    on_dismiss: Option<EventHandler<()>>,
) -> Element {
    let class = match kind {
        AlertKind::Error => "alert alert-error",
        AlertKind::Success => "alert alert-success",
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            match kind {
                AlertKind::Error => rsx! { Icon { icon: FaCircleExclamation, width: 14, height: 14 } },
                AlertKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
            }
            span { class: "alert-text", "{message}" }
            if let Some(handler) = on_dismiss {
                button {
                    class: "alert-close",
                    title: "Dismiss",
                    onclick: move |_| handler.call(()),
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }
        }
    }
}
