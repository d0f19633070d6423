mod api;
mod app;
mod components;
mod cookie;
mod filter;
mod model;
mod pages;
mod session;
mod view;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
