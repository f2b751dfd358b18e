pub(crate) mod filters_panel;
pub(crate) mod posts_panel;
