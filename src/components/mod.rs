pub mod filter_bar;
pub mod job_card;
pub mod nav_bar;
