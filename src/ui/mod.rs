pub mod display;
pub mod theme;

pub use display::{print_bullet_list, print_error, print_hint, print_success, print_warning};
pub use theme::{configure_theme, detect_theme_kind_from_env};
