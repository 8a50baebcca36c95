pub mod activity_feed;
pub mod app;
pub mod batch_form;
pub mod batch_manage;
pub mod cart_review;
pub mod demand_board;
pub mod produce_view;
pub mod profile_view;
pub mod programs_view;
pub mod shared_state;
pub mod shop_view;
pub mod thank_you;
