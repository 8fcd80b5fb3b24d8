//! MKE Fish Fry Frontend Entry Point

mod app;
mod components;
mod context;
mod data;
mod dates;
mod filters;
mod geo;
mod leaflet;
mod models;
mod pages;
mod share;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
