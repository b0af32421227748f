//! Brand colours and shared class strings.

use crate::domain::Leg;

pub const PINK: &str = "#ff1493";
pub const MINT: &str = "#68c3cd";
/// Lighter navy for areas without their own colour.
pub const NAVY_LIGHT: &str = "#6b7db3";

pub const PANEL: &str = "bg-white/10 p-5 rounded-lg border-2 border-white";
pub const PANEL_TITLE: &str = "text-base font-bold text-white mb-3";
pub const ERROR_PANEL: &str = "rounded-lg border-2 border-red-400 bg-red-500/10 p-5 text-red-200";

pub fn area_fill(area_key: &str) -> &'static str {
    match area_key {
        "standard" => PINK,
        "stadtrand" => MINT,
        _ => NAVY_LIGHT,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaStyle {
    pub fill_opacity: f64,
    pub stroke_width: f64,
}

/// Plain map: every area at the same strength.
pub const AREA_PLAIN: AreaStyle = AreaStyle {
    fill_opacity: 0.5,
    stroke_width: 2.0,
};

/// Selection map: the chosen area stands out, the rest fade.
pub fn area_style(selected: Option<&str>, area_key: &str) -> AreaStyle {
    match selected {
        None => AreaStyle {
            fill_opacity: 0.4,
            stroke_width: 2.0,
        },
        Some(key) if key == area_key => AreaStyle {
            fill_opacity: 0.8,
            stroke_width: 4.0,
        },
        Some(_) => AreaStyle {
            fill_opacity: 0.2,
            stroke_width: 2.0,
        },
    }
}

pub fn leg_accent(leg: Leg) -> &'static str {
    match leg {
        Leg::Pickup => "pink",
        Leg::Delivery => "mint",
    }
}

pub fn tab_button(leg: Leg, active: bool) -> String {
    let base = "flex-1 px-6 py-3 text-base font-bold text-white rounded-t-lg transition-all cursor-pointer";
    if active {
        format!("{base} bg-{}", leg_accent(leg))
    } else {
        format!("{base} bg-white/10 hover:bg-white/20")
    }
}

pub fn chip(leg: Leg, active: bool) -> String {
    let base = "rounded-full border-2 px-3 py-1 text-sm font-bold transition-colors";
    let accent = leg_accent(leg);
    if active {
        format!("{base} border-{accent} bg-{accent} text-white")
    } else {
        format!("{base} border-{accent} text-{accent} hover:bg-white/10")
    }
}
