use dioxus::prelude::*;

#[component]
pub fn AppNavbar(children: Element) -> Element {
    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Heatgrid" }
                    }
                    span { class: "navbar__brand-subtitle", "Izgara verisinden ısı haritası" }
                }
                nav { class: "navbar__links", {children} }
            }
        }
    }
}
