// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast manager inside an iced window.
//!
//! The `App` owns the single toast [`Manager`] and passes it by reference to
//! the view; every part of the app that needs feedback goes through it.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Anchor, Manager, Severity, ToastMessage};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    toasts: Manager,
    /// Display duration requested on the command line, if any.
    duration_override: Option<i64>,
    window_width: f32,
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("anchor", &self.toasts.anchor())
            .field("active_toasts", &self.toasts.active_count())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the persisted config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, load_error) = match config::load() {
            Ok(config) => (config, None),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load settings, using defaults");
                (Config::default(), Some(err))
            }
        };
        let mut app = Self::with_config(flags, &config);
        if let Some(err) = load_error {
            app.report_error(&err, Instant::now());
        }
        (app, Task::none())
    }

    fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);

        // The anchor flag seeds the defaults so every later toast stays there.
        let mut config = config.clone();
        let mut anchor_error = None;
        if let Some(name) = flags.anchor.as_deref() {
            match name.parse::<Anchor>() {
                Ok(anchor) => config.default_anchor = Some(anchor),
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring anchor flag");
                    anchor_error = Some(err);
                }
            }
        }

        let mut toasts = Manager::new(&config);
        toasts.initialize();

        let now = Instant::now();
        let mut app = Self {
            i18n,
            toasts,
            duration_override: flags.duration_ms,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            now,
        };
        if let Some(err) = anchor_error {
            app.report_error(&err, now);
        }
        app
    }

    fn title(&self) -> String {
        self.i18n.tr("demo-window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.toasts.has_toasts()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        self.now = now;

        match message {
            Message::Toast(toast_message) => {
                self.toasts.handle_message(&toast_message, now);
            }
            Message::Show(severity) => {
                let key = match severity {
                    Severity::Success => "demo-message-success",
                    Severity::Error => "demo-message-error",
                    Severity::Warning => "demo-message-warning",
                    Severity::Info => "demo-message-info",
                };
                self.show(self.i18n.tr(key), severity, self.duration_override, now);
            }
            Message::ShowPinned => {
                self.show(self.i18n.tr("demo-message-pinned"), Severity::Info, Some(0), now);
            }
            Message::SelectAnchor(anchor) => {
                self.select_anchor(anchor, now);
            }
            Message::Tick(instant) => {
                self.now = instant;
                self.toasts.handle_message(&ToastMessage::Tick(instant), instant);
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
            }
        }

        Task::none()
    }

    fn show(&mut self, message: String, severity: Severity, duration_ms: Option<i64>, now: Instant) {
        let anchor = self.toasts.anchor();
        let mut builder = self
            .toasts
            .build_toast()
            .message(message)
            .severity(severity)
            .anchor(anchor);
        if let Some(duration_ms) = duration_ms {
            builder = builder.duration_ms(duration_ms);
        }
        if let Err(err) = builder.show(now) {
            self.report_error(&err, now);
        }
    }

    /// Surfaces an error to the user as a localized error toast.
    fn report_error(&mut self, err: &Error, now: Instant) {
        tracing::error!(error = %err, "reporting error");
        let text = self.i18n.tr(err.i18n_key());
        let anchor = self.toasts.anchor();
        let result = self
            .toasts
            .build_toast()
            .message(text)
            .severity(Severity::Error)
            .anchor(anchor)
            .show(now);
        if let Err(err) = result {
            tracing::error!(error = %err, "failed to show error toast");
        }
    }

    fn select_anchor(&mut self, anchor: Anchor, now: Instant) {
        self.toasts.set_anchor(anchor);
        let text = self
            .i18n
            .tr_with_args("demo-anchor-changed", &[("anchor", anchor.as_str())]);
        let result = self
            .toasts
            .build_toast()
            .message(text)
            .anchor(anchor)
            .show(now);
        if let Err(err) = result {
            self.report_error(&err, now);
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toasts: &self.toasts,
            window_width: self.window_width,
            now: self.now,
        })
    }
}
