use dioxus::prelude::*;

use crate::components::icons::{LogOutIcon, XIcon};
use crate::routes::Route;
use crate::stores::auth_store;

/// How [`SignInButton`] presents the sign-in form
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SignInMode {
    #[default]
    Modal,
    /// Navigate to the settings page, which hosts the same form inline
    Redirect,
}

/// Wraps its child in a sign-in trigger. Renders nothing while signed in.
#[component]
pub fn SignInButton(#[props(default)] mode: SignInMode, children: Element) -> Element {
    let mut modal_open = use_signal(|| false);
    let navigator = navigator();

    if auth_store::is_authenticated() {
        return rsx! {};
    }

    rsx! {
        span {
            onclick: move |_| match mode {
                SignInMode::Modal => modal_open.set(true),
                SignInMode::Redirect => {
                    navigator.push(Route::Settings {});
                }
            },
            {children}
        }

        if *modal_open.read() {
            SignInModal { on_close: move |_| modal_open.set(false) }
        }
    }
}

#[component]
pub fn SignInModal(on_close: EventHandler<()>) -> Element {
    rsx! {
        // Overlay - clicking outside closes
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),

            div {
                class: "relative bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-2xl max-w-sm w-full p-6 shadow-xl",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "sign-in-title",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "absolute top-4 right-4 p-1 rounded-lg text-gray-500 hover:bg-gray-100 dark:hover:bg-gray-800",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-5 h-5" }
                }

                h2 {
                    class: "text-lg font-bold mb-4 text-gray-900 dark:text-white",
                    id: "sign-in-title",
                    "Sign in to NeuroNest"
                }

                SignInForm { on_signed_in: move |_| on_close.call(()) }
            }
        }
    }
}

/// Email + display name form backed by [`auth_store::sign_in`]
#[component]
pub fn SignInForm(on_signed_in: Option<EventHandler<()>>) -> Element {
    let mut email = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match auth_store::sign_in(&email.read(), &display_name.read()) {
            Ok(_) => {
                error.set(None);
                if let Some(handler) = on_signed_in {
                    handler.call(());
                }
            }
            Err(e) => error.set(Some(e)),
        }
    };

    rsx! {
        form {
            class: "space-y-3",
            onsubmit: submit,

            if let Some(err) = error.read().as_ref() {
                div {
                    class: "p-3 bg-red-100 dark:bg-red-900 text-red-800 dark:text-red-200 rounded-lg text-sm",
                    "{err}"
                }
            }

            input {
                class: "w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-purple-500 focus:border-transparent",
                r#type: "email",
                placeholder: "you@example.com",
                value: "{email}",
                oninput: move |evt| email.set(evt.value())
            }
            input {
                class: "w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-purple-500 focus:border-transparent",
                r#type: "text",
                placeholder: "Display name (optional)",
                value: "{display_name}",
                oninput: move |evt| display_name.set(evt.value())
            }
            button {
                class: "w-full px-4 py-2 rounded-xl bg-gradient-to-r from-purple-500 to-pink-500 text-white font-medium hover:opacity-90 transition-opacity",
                r#type: "submit",
                "Continue"
            }
            p {
                class: "text-xs text-gray-500 dark:text-gray-400",
                "Your session is kept in this browser only."
            }
        }
    }
}

/// Avatar with an account menu. Renders nothing while signed out.
#[component]
pub fn UserButton(
    after_sign_out: Route,
    #[props(default = "h-10 w-10".to_string())] avatar_class: String,
) -> Element {
    let mut menu_open = use_signal(|| false);
    let navigator = navigator();

    let Some(session) = auth_store::current_session() else {
        return rsx! {};
    };
    let initials = auth_store::initials(&session.display_name);

    rsx! {
        div {
            class: "relative",
            button {
                class: "{avatar_class} rounded-full bg-gradient-to-br from-purple-500 to-pink-500 text-white text-sm font-bold flex items-center justify-center shadow-lg",
                title: "{session.display_name}",
                onclick: move |_| {
                    let is_open = *menu_open.read();
                    menu_open.set(!is_open);
                },
                "{initials}"
            }

            if *menu_open.read() {
                div {
                    class: "absolute left-0 top-full mt-2 bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-xl shadow-lg min-w-[220px] overflow-hidden z-50",
                    div {
                        class: "px-4 py-3 border-b border-gray-100 dark:border-gray-800",
                        p { class: "text-sm font-semibold text-gray-900 dark:text-white", "{session.display_name}" }
                        p { class: "text-xs text-gray-500 dark:text-gray-400 truncate", "{session.email}" }
                    }
                    button {
                        class: "w-full flex items-center gap-3 px-4 py-3 text-sm text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition",
                        onclick: move |_| {
                            menu_open.set(false);
                            auth_store::sign_out();
                            navigator.push(after_sign_out.clone());
                        },
                        LogOutIcon { class: "w-4 h-4" }
                        span { "Sign out" }
                    }
                }
            }
        }
    }
}
