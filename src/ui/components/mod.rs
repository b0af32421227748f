pub mod area_map;
pub mod hero_slideshow;
pub mod nav_drawer;
pub mod package_list;
pub mod price_panel;
pub mod toast;
