pub mod card_animated;
pub mod filter_panel;
pub mod pagination_controls;
