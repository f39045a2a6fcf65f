//! Fixed top-right stack of toast notifications.
//!
//! Mounted once at startup next to the static page content. Each card keeps
//! its DOM node for its whole life; only the phase class changes, which
//! drives the slide-in and slide-out keyframes below.

use effects::toast::{ToastPhase, ToastView};
use leptos::prelude::*;

use crate::state::toasts::Notifier;

const TOAST_CSS: &str = r"
.notification-stack {
    position: fixed;
    top: 20px;
    right: 20px;
    z-index: 1000;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    pointer-events: none;
}
.notification {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 1.5rem;
    border-radius: 0.5rem;
    color: white;
    font-size: 0.875rem;
    font-weight: 500;
    pointer-events: auto;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
}
.notification__close {
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
    font-size: 1.125rem;
    line-height: 1;
}
.toast--entering { animation: folio-toast-in 0.3s ease forwards; }
.toast--shown { transform: translateX(0); }
.toast--leaving { animation: folio-toast-out 0.3s ease forwards; }
@keyframes folio-toast-in { from { transform: translateX(120%); } to { transform: translateX(0); } }
@keyframes folio-toast-out { from { transform: translateX(0); } to { transform: translateX(120%); } }
";

#[component]
pub fn ToastHost(notifier: Notifier) -> impl IntoView {
    view! {
        <style>{TOAST_CSS}</style>
        <div class="notification-stack" role="status" aria-live="polite">
            <For
                each=move || notifier.snapshot()
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast=toast notifier=notifier/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: ToastView, notifier: Notifier) -> impl IntoView {
    let id = toast.id;
    let kind = toast.kind;
    let class = move || {
        let phase = notifier.phase(id).unwrap_or(ToastPhase::Leaving);
        format!("notification notification--{} {}", kind.as_str(), phase.class())
    };

    view! {
        <div class=class style=format!("background-color: {};", kind.color())>
            <i class=kind.icon() aria-hidden="true"></i>
            <span class="notification__message">{toast.message}</span>
            <button
                type="button"
                class="notification__close"
                aria-label="Dismiss notification"
                on:click=move |_| notifier.dismiss(id)
            >
                "×"
            </button>
        </div>
    }
}
