use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::ChatView;
use dioxus::prelude::*;

const ATUPELE_CSS: Asset = asset!("/assets/atupele.css");

#[component]
pub fn App() -> Element {
    let theme = use_signal(|| ThemeMode::Light);

    rsx! {
        ThemeStyles { theme }
        div { class: "app-shell",
            AppHeader { theme }
            ChatView {}
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: ATUPELE_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let (next_mode, toggle_label) = match theme() {
        ThemeMode::Light => (ThemeMode::Dark, "Dark"),
        ThemeMode::Dark => (ThemeMode::Light, "Light"),
    };

    rsx! {
        div { class: "header",
            svg {
                class: "logo-dot",
                view_box: "0 0 512 512",
                fill: "currentColor",
                circle { cx: "256", cy: "256", r: "100" }
            }
            "AtupeleGPT"
            button {
                class: "theme-toggle",
                r#type: "button",
                onclick: move |_| theme.set(next_mode),
                "{toggle_label}"
            }
        }
    }
}
