//! Building blocks shared by the screens: tables, charts, the slide panel
//! and the Pico.css wrappers.
pub mod action_link;
pub mod data_table;
pub mod empty_state;
pub mod filter_bar;
pub mod hash_popover;
pub mod histogram_chart;
pub mod list_item;
pub mod namespace_picker;
pub mod pico;
pub mod slide_panel;
pub mod snackbar;
