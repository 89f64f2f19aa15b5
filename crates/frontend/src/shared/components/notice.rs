use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// One-line message shown above a list after an operation
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "warning-box warning-box--success",
            NoticeKind::Info => "warning-box warning-box--info",
            NoticeKind::Error => "warning-box warning-box--error",
        }
    }

    fn glyph(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "✓",
            NoticeKind::Info => "ℹ",
            NoticeKind::Error => "⚠",
        }
    }
}

const SUCCESS_TIMEOUT_MS: u32 = 4000;

/// Renders the current notice. Success notices clear themselves after a
/// few seconds unless replaced in the meantime.
#[component]
pub fn NoticeBar(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    Effect::new(move |_| {
        let Some(shown) = notice.get().filter(|n| n.kind == NoticeKind::Success) else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SUCCESS_TIMEOUT_MS).await;
            if notice.with_untracked(|n| n.as_ref() == Some(&shown)) {
                notice.set(None);
            }
        });
    });

    move || {
        notice.get().map(|n| {
            view! {
                <div class=n.class()>
                    <span class="warning-box__icon">{n.glyph()}</span>
                    <span class="warning-box__text">{n.text.clone()}</span>
                    <button class="warning-box__close" on:click=move |_| notice.set(None)>
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
            }
        })
    }
}

/// Browser confirmation dialog; false when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
