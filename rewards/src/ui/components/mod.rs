pub mod feedback_banner;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
