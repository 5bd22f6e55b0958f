pub mod use_error_reporter;
pub mod use_event_watcher;
pub mod use_histogram;
pub mod use_paged_collection;
pub mod use_slide;
pub mod use_window_title;
