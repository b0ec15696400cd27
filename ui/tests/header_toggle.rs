//! Browser tests for the drawer toggle.
//!
//! Run with `wasm-pack test --headless --chrome ui`.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared::user::User;
use ui::Header;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn create_mount_point() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn cleanup(mount: &web_sys::Element) {
    mount.remove();
}

/// Render `root` into `mount` and give the renderer time to flush.
async fn mount_dioxus(root: fn() -> Element, mount: &web_sys::Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
    settle().await;
}

async fn settle() {
    TimeoutFuture::new(0).await;
    TimeoutFuture::new(0).await;
}

fn menu_button(mount: &web_sys::Element) -> web_sys::HtmlElement {
    mount
        .query_selector("button.menu-button")
        .unwrap()
        .expect("menu button rendered")
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

static TOGGLES: AtomicUsize = AtomicUsize::new(0);

#[wasm_bindgen_test]
async fn menu_button_calls_handler_once_per_click() {
    fn wrapper() -> Element {
        rsx! {
            Header {
                user: Some(User::from_netid("abc123")),
                on_drawer_toggle: Some(EventHandler::new(move |_| {
                    TOGGLES.fetch_add(1, Ordering::SeqCst);
                })),
            }
        }
    }

    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    let button = menu_button(&mount);
    button.click();
    settle().await;
    assert_eq!(TOGGLES.load(Ordering::SeqCst), 1);

    button.click();
    settle().await;
    assert_eq!(TOGGLES.load(Ordering::SeqCst), 2);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn menu_button_without_handler_is_noop() {
    fn wrapper() -> Element {
        rsx! { Header { user: None } }
    }

    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    menu_button(&mount).click();
    settle().await;

    let chip = mount.query_selector(".chip-label").unwrap().unwrap();
    assert_eq!(chip.text_content().unwrap_or_default(), "");

    cleanup(&mount);
}
