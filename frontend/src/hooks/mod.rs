pub mod use_scroll_into_view;
