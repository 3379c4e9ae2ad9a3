#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod analytics;
mod banner;
mod config;
mod contact;
mod content;
mod download;
mod effects;
mod navigation;
mod reveal;
mod telemetry;
mod theme;
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("The portfolio runs in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
