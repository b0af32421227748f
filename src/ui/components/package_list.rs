use dioxus::prelude::*;

use crate::domain::selection::Package;
use crate::ui::theme;

#[component]
pub fn PackageList(
    packages: Vec<Package>,
    can_remove: bool,
    on_input: EventHandler<(usize, String)>,
    on_add: EventHandler<()>,
    on_remove: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: theme::PANEL,
            h3 { class: theme::PANEL_TITLE, "Pakete" }
            ul { class: "flex flex-col gap-3",
                for (idx, package) in packages.into_iter().enumerate() {
                    li { key: "{package.id}", class: "flex items-center gap-3",
                        label {
                            r#for: "{package.id}",
                            class: "w-24 text-sm font-bold text-white",
                            "Paket {idx + 1}:"
                        }
                        input {
                            id: "{package.id}",
                            r#type: "number",
                            inputmode: "decimal",
                            min: "0",
                            step: "0.1",
                            class: "w-28 rounded-lg border-2 border-white bg-white/10 px-3 py-1 text-white",
                            value: "{package.input}",
                            oninput: move |evt| on_input.call((idx, evt.value())),
                        }
                        span { class: "text-sm text-white", "kg" }
                        if can_remove {
                            button {
                                r#type: "button",
                                class: "ml-auto rounded-full px-2 text-pink hover:bg-white/10",
                                aria_label: "Paket {idx + 1} entfernen",
                                onclick: move |_| on_remove.call(idx),
                                "✕"
                            }
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "mt-4 rounded-lg border-2 border-mint px-4 py-2 text-sm font-bold text-mint hover:bg-white/10",
                onclick: move |_| on_add.call(()),
                "+ Paket hinzufügen"
            }
        }
    }
}
