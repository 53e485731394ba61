// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are drawn as cards with a severity-colored accent, an icon badge,
//! a title, the message, a close button and a draining progress bar. The
//! overlay positions them in the anchor region's corner.

use super::instance::ToastInstance;
use super::manager::{Manager, Message};
use super::region::RegionStyle;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast at its current animation position.
    pub fn view<'a>(
        instance: &'a ToastInstance,
        i18n: &'a I18n,
        style: &RegionStyle,
        width: f32,
        now: Instant,
    ) -> Element<'a, Message> {
        let severity = instance.config().severity;
        let accent = severity.color();
        let alpha = instance.opacity(now, style.entry_animation, style.exit_animation);
        let offset = instance.slide_offset(now, style.entry_animation, style.exit_animation);

        let badge = Container::new(
            text(severity.glyph())
                .size(typography::ICON)
                .color(with_alpha(accent, alpha)),
        )
        .width(Length::Fixed(sizing::ICON_BADGE))
        .height(Length::Fixed(sizing::ICON_BADGE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| badge_style(accent, alpha));

        let body = Column::new()
            .spacing(spacing::XXS)
            .push(
                text(i18n.tr(severity.title_key()))
                    .size(typography::TITLE)
                    .color(with_alpha(palette::GRAY_900, alpha)),
            )
            .push(
                text(instance.config().message.as_str())
                    .size(typography::BODY)
                    .color(with_alpha(palette::GRAY_900, alpha * opacity::MESSAGE)),
            );

        let close = button(
            text("✕")
                .size(typography::CLOSE)
                .color(with_alpha(palette::GRAY_200, alpha)),
        )
        .on_press(Message::Close(instance.id()))
        .width(Length::Fixed(sizing::CLOSE_BUTTON))
        .height(Length::Fixed(sizing::CLOSE_BUTTON))
        .style(close_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(badge)
            .push(Container::new(body).width(Length::Fill))
            .push(close);

        let mut card = Column::new().push(
            Container::new(content).padding(Padding {
                top: spacing::MD,
                right: spacing::MD,
                bottom: spacing::MD,
                left: spacing::MD + sizing::ACCENT_STRIPE,
            }),
        );
        if let Some(remaining) = instance.remaining_fraction(now) {
            card = card.push(progress_bar(accent, remaining, width, alpha));
        }

        let card = Container::new(card)
            .width(Length::Fixed(width))
            .style(move |_theme: &Theme| toast_container_style(accent, alpha));

        slide(card.into(), offset, width)
    }

    /// Renders the anchor region with every active toast, newest last.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        window_width: f32,
        now: Instant,
    ) -> Element<'a, Message> {
        let region = manager.region();
        let Some(style) = region.style().copied() else {
            return empty();
        };
        if !manager.has_toasts() {
            return empty();
        }

        let width = style.width_for(window_width);
        let toasts: Vec<Element<'a, Message>> = manager
            .active()
            .map(|instance| Self::view(instance, i18n, &style, width, now))
            .collect();

        let placement = region.placement();
        let column = Column::with_children(toasts)
            .spacing(style.gap)
            .width(Length::Fixed(width));

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(placement.align_x())
            .align_y(placement.align_y())
            .padding(Padding {
                top: placement.top.unwrap_or(0.0),
                right: placement.right.unwrap_or(0.0),
                bottom: placement.bottom.unwrap_or(0.0),
                left: placement.left.unwrap_or(0.0),
            })
            .into()
    }
}

fn empty<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

/// Shifts `card` horizontally by `offset` card widths, clipping what leaves the slot.
fn slide<'a>(card: Element<'a, Message>, offset: f32, width: f32) -> Element<'a, Message> {
    let shift = offset.abs() * width;
    if shift < 0.5 {
        return card;
    }

    let spacer = Space::new().width(Length::Fixed(shift));
    let (row, align) = if offset > 0.0 {
        (Row::new().push(spacer).push(card), alignment::Horizontal::Left)
    } else {
        (Row::new().push(card).push(spacer), alignment::Horizontal::Right)
    };

    Container::new(row)
        .width(Length::Fixed(width))
        .align_x(align)
        .clip(true)
        .into()
}

fn progress_bar<'a>(accent: Color, remaining: f32, width: f32, alpha: f32) -> Element<'a, Message> {
    let bar = Container::new(Space::new())
        .width(Length::Fixed(width * remaining.clamp(0.0, 1.0)))
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(with_alpha(accent, alpha))),
            ..Default::default()
        });

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::TRACK * alpha,
                ..palette::BLACK
            })),
            ..Default::default()
        })
        .into()
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE * alpha,
            ..palette::WHITE
        })),
        border: Border {
            color: with_alpha(accent, alpha),
            width: sizing::ACCENT_STRIPE / 3.0,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::TOAST.color, alpha),
            ..shadow::TOAST
        },
        text_color: Some(with_alpha(palette::GRAY_900, alpha)),
        ..Default::default()
    }
}

fn badge_style(accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::ICON_BADGE * alpha,
            ..accent
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let hover_background = Some(Background::Color(Color {
        a: opacity::OVERLAY_SUBTLE,
        ..palette::BLACK
    }));
    let round = Border {
        radius: radius::FULL.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette::GRAY_200,
            border: round,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: hover_background,
            text_color: palette::GRAY_400,
            border: round,
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn faded_toast_is_transparent() {
        let style = toast_container_style(palette::ERROR_500, 0.0);
        assert_eq!(style.border.color.a, 0.0);
        assert_eq!(style.text_color.map(|c| c.a), Some(0.0));
    }

    #[test]
    fn close_button_highlights_on_hover() {
        let theme = Theme::Light;
        assert!(close_button_style(&theme, button::Status::Active).background.is_none());
        assert!(close_button_style(&theme, button::Status::Hovered).background.is_some());
    }
}
