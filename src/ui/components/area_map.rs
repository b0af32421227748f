use dioxus::prelude::*;

use crate::domain::areas::AreaShapes;
use crate::domain::{AreaIndex, Leg, MapFrame};
use crate::ui::theme::{self, AreaStyle, AREA_PLAIN};

const MAP_WIDTH: f64 = 600.0;
const MAP_HEIGHT: f64 = 800.0;
const MAP_PADDING: f64 = 40.0;

pub const MAP_LABEL: &str = "Karte der Liefergebiete";

/// Popup position as percentages of the map box, so it follows the SVG when it scales.
fn popup_position(frame: &MapFrame, shapes: &AreaShapes) -> Option<(f64, f64)> {
    let [x, y] = frame.project(shapes.label_anchor()?);
    Some((x / frame.width * 100.0, y / frame.height * 100.0))
}

/// Delivery areas drawn as SVG polygons.
///
/// Without `selectable`, every area gets the same plain style and a click only opens the
/// label popup. With it, the `selected` area is emphasised and clicks are reported through
/// `on_select` as configured area keys.
#[component]
pub fn AreaMap(
    index: AreaIndex,
    #[props(default)] selectable: bool,
    #[props(default)] selected: Option<String>,
    #[props(default)] on_select: Option<EventHandler<String>>,
) -> Element {
    let mut popup = use_signal(|| None::<String>);
    let frame = MapFrame::fit(index.bounds(), MAP_WIDTH, MAP_HEIGHT, MAP_PADDING);

    let popup_view = popup().and_then(|key| {
        let shapes = index.get(&key)?;
        let (left, top) = popup_position(&frame, shapes)?;
        Some((shapes.label.clone(), left, top))
    });

    let mut polygons = Vec::new();
    for shapes in &index.areas {
        let style: AreaStyle = if selectable {
            theme::area_style(selected.as_deref(), &shapes.key)
        } else {
            AREA_PLAIN
        };
        let fill = theme::area_fill(&shapes.key);
        for (ring_idx, ring) in shapes.rings.iter().enumerate() {
            polygons.push((
                format!("{}-{ring_idx}", shapes.key),
                shapes.key.clone(),
                frame.svg_points(ring),
                fill,
                style,
            ));
        }
    }

    rsx! {
        div { class: "relative",
            svg {
                class: "area-map rounded-lg",
                view_box: frame.view_box(),
                "role": "img",
                "aria-label": MAP_LABEL,
                for (id, key, points, fill, style) in polygons {
                    polygon {
                        key: "{id}",
                        points: "{points}",
                        fill: "{fill}",
                        fill_opacity: "{style.fill_opacity}",
                        stroke: "#ffffff",
                        stroke_width: "{style.stroke_width}",
                        onclick: move |_| {
                            popup.set(Some(key.clone()));
                            if selectable {
                                if let Some(handler) = on_select {
                                    handler.call(key.clone());
                                }
                            }
                        },
                    }
                }
            }
            if let Some((label, left, top)) = popup_view {
                div {
                    class: "map-popup",
                    style: "left: {left:.1}%; top: {top:.1}%; transform: translate(-50%, -100%);",
                    span { "{label}" }
                    button {
                        r#type: "button",
                        class: "ml-2 text-xs",
                        aria_label: "Schließen",
                        onclick: move |_| popup.set(None),
                        "✕"
                    }
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AreaOption {
    pub key: String,
    pub label: String,
}

/// Button row with one chip per configured area; works without map data.
#[component]
pub fn AreaChips(
    options: Vec<AreaOption>,
    leg: Leg,
    selected: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2", role: "group", aria_label: leg.label(),
            for option in options {
                button {
                    key: "{option.key}",
                    r#type: "button",
                    class: theme::chip(leg, selected.as_deref() == Some(option.key.as_str())),
                    aria_pressed: "{selected.as_deref() == Some(option.key.as_str())}",
                    onclick: {
                        let key = option.key.clone();
                        move |_| on_select.call(key.clone())
                    },
                    "{option.label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::*;
    use crate::domain::areas::Bounds;

    fn one_area_index() -> AreaIndex {
        AreaIndex {
            areas: vec![AreaShapes {
                key: "standard".into(),
                label: "Standard".into(),
                rings: vec![vec![[12.0, 54.0], [12.2, 54.0], [12.2, 54.2], [12.0, 54.0]]],
            }],
        }
    }

    #[test]
    fn map_svg_is_labelled_for_screen_readers() {
        fn app() -> Element {
            rsx! { AreaMap { index: one_area_index() } }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"role="img""#), "{html}");
        assert!(html.contains(&format!(r#"aria-label="{MAP_LABEL}""#)), "{html}");
        assert_eq!(html.matches("<polygon").count(), 1);
    }

    #[test]
    fn popup_sits_on_the_projected_anchor() {
        let shapes = AreaShapes {
            key: "standard".into(),
            label: "Standard".into(),
            rings: vec![vec![[12.0, 54.0], [12.2, 54.0], [12.2, 54.2], [12.0, 54.2]]],
        };
        let bounds = Bounds {
            min: [12.0, 54.0],
            max: [12.2, 54.2],
        };
        let frame = MapFrame::fit(Some(bounds), MAP_WIDTH, MAP_HEIGHT, MAP_PADDING);
        let (left, top) = popup_position(&frame, &shapes).unwrap();
        assert!((left - 50.0).abs() < 1e-6);
        assert!((top - 50.0).abs() < 1e-6);
    }

    #[test]
    fn area_without_rings_has_no_popup() {
        let shapes = AreaShapes {
            key: "umland".into(),
            label: "Umland".into(),
            rings: Vec::new(),
        };
        let frame = MapFrame::fit(None, MAP_WIDTH, MAP_HEIGHT, MAP_PADDING);
        assert!(popup_position(&frame, &shapes).is_none());
    }
}
