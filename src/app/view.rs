// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The page content sits at the bottom of a stack; the toast region is
//! layered above it so toasts never shift the layout.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{Anchor, Manager, Severity, Toast};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toasts: &'a Manager,
    pub window_width: f32,
    pub now: Instant,
}

/// Renders the demo controls with the toast region on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let overlay = Toast::view_overlay(ctx.toasts, ctx.i18n, ctx.window_width, ctx.now)
        .map(Message::Toast);

    Stack::new()
        .push(controls(ctx.i18n, ctx.toasts.anchor()))
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn controls<'a>(i18n: &I18n, current: Anchor) -> Element<'a, Message> {
    let severities = Severity::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, &severity| {
        let label = match severity {
            Severity::Success => i18n.tr("demo-show-success"),
            Severity::Error => i18n.tr("demo-show-error"),
            Severity::Warning => i18n.tr("demo-show-warning"),
            Severity::Info => i18n.tr("demo-show-info"),
        };
        row.push(button(text(label)).on_press(Message::Show(severity)))
    });

    let anchors = Anchor::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, &anchor| {
        let choice = button(text(anchor.as_str()));
        let choice = if anchor == current {
            choice
        } else {
            choice.on_press(Message::SelectAnchor(anchor))
        };
        row.push(choice)
    });

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(severities)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(button(text(i18n.tr("demo-show-pinned"))).on_press(Message::ShowPinned))
                .push(
                    button(text(i18n.tr("demo-dismiss-all"))).on_press(Message::Toast(
                        crate::ui::notifications::ToastMessage::DismissAll,
                    )),
                ),
        )
        .push(text(i18n.tr("demo-anchor-label")))
        .push(anchors);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
