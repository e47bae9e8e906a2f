//! Chat message bubbles.

use designsystem::{contrast_text_color, Style, WispTheme};
use serde::{Deserialize, Serialize};

use crate::paint::{border, translucent};

/// Who sent a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    /// Sent by the local user; aligned right.
    Own,
    /// Sent by someone else; aligned left.
    #[default]
    Other,
    /// Notice from the application, centered.
    System,
}

/// Colors of a chat bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBubbleColors {
    /// Background.
    pub background: String,
    /// Border.
    pub border: String,
    /// Message body.
    pub text: String,
    /// Timestamp and sender name.
    pub secondary_text: String,
    /// Inline links.
    pub link: String,
}

/// Resolves bubble colors for a sender.
///
/// Own messages sit on the accent color with black or white text picked by
/// luminance; their timestamp line is a translucent version of that text.
#[must_use]
pub fn resolve_chat_bubble_colors(sender: ChatSender, theme: &WispTheme) -> ChatBubbleColors {
    let c = &theme.colors;
    match sender {
        ChatSender::Own => {
            let text = contrast_text_color(&c.accent.primary);
            ChatBubbleColors {
                background: c.accent.primary.clone(),
                border: c.accent.primary.clone(),
                text: text.to_owned(),
                secondary_text: translucent(text, 0.72),
                link: text.to_owned(),
            }
        }
        ChatSender::Other => ChatBubbleColors {
            background: c.background.raised.clone(),
            border: c.border.subtle.clone(),
            text: c.text.on_raised.clone(),
            secondary_text: c.text.on_raised_secondary.clone(),
            link: c.text.link.clone(),
        },
        ChatSender::System => ChatBubbleColors {
            background: "transparent".to_owned(),
            border: "transparent".to_owned(),
            text: c.text.muted.clone(),
            secondary_text: c.text.muted.clone(),
            link: c.text.link.clone(),
        },
    }
}

/// Builds the style of a bubble. Consecutive messages from the same sender
/// pass `tail = false` so only the last one gets the squared corner.
#[must_use]
pub fn build_chat_bubble_style(
    colors: &ChatBubbleColors,
    sender: ChatSender,
    tail: bool,
    theme: &WispTheme,
) -> Style {
    let radius = theme.radii.lg;
    let tail_radius = if tail { theme.radii.sm } else { radius };
    let style = Style::new()
        .set("display", "flex")
        .set("flexDirection", "column")
        .set("gap", theme.spacing.xxs)
        .set("maxWidth", "75%")
        .set("paddingTop", theme.spacing.sm)
        .set("paddingBottom", theme.spacing.sm)
        .set("paddingLeft", theme.spacing.md)
        .set("paddingRight", theme.spacing.md)
        .set("fontSize", theme.typography.sizes.base)
        .set("lineHeight", theme.typography.line_heights.normal)
        .set("color", &colors.text)
        .set("backgroundColor", &colors.background)
        .set("border", border(&colors.border))
        .set("wordBreak", "break-word");

    match sender {
        ChatSender::Own => style
            .set("alignSelf", "flex-end")
            .set("borderTopLeftRadius", radius)
            .set("borderTopRightRadius", radius)
            .set("borderBottomLeftRadius", radius)
            .set("borderBottomRightRadius", tail_radius),
        ChatSender::Other => style
            .set("alignSelf", "flex-start")
            .set("borderTopLeftRadius", radius)
            .set("borderTopRightRadius", radius)
            .set("borderBottomLeftRadius", tail_radius)
            .set("borderBottomRightRadius", radius),
        ChatSender::System => style
            .set("alignSelf", "center")
            .set("borderRadius", radius)
            .set("fontSize", theme.typography.sizes.sm)
            .set("textAlign", "center"),
    }
}

/// Builds the style of the timestamp and status line under the message.
#[must_use]
pub fn build_chat_bubble_meta_style(colors: &ChatBubbleColors, theme: &WispTheme) -> Style {
    Style::new()
        .set("fontSize", theme.typography.sizes.xs)
        .set("color", &colors.secondary_text)
        .set("alignSelf", "flex-end")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_bubble_sits_on_accent() {
        let theme = WispTheme::dark();
        let colors = resolve_chat_bubble_colors(ChatSender::Own, &theme);
        assert_eq!(colors.background, theme.colors.accent.primary);
        assert_eq!(colors.text, "#FFFFFF");
        assert_eq!(colors.secondary_text, "rgba(255, 255, 255, 0.72)");
    }

    #[test]
    fn other_bubble_uses_raised_text() {
        let theme = WispTheme::light();
        let colors = resolve_chat_bubble_colors(ChatSender::Other, &theme);
        assert_eq!(colors.background, theme.colors.background.raised);
        assert_eq!(colors.text, theme.colors.text.on_raised);
    }

    #[test]
    fn tail_corner_follows_sender_side() {
        let theme = WispTheme::dark();
        let own = resolve_chat_bubble_colors(ChatSender::Own, &theme);
        let style = build_chat_bubble_style(&own, ChatSender::Own, true, &theme);
        assert_eq!(style.get_str("alignSelf"), Some("flex-end"));
        assert_eq!(style.get_str("maxWidth"), Some("75%"));
        assert_eq!(
            style.get_number("borderBottomRightRadius"),
            Some(f64::from(theme.radii.sm))
        );

        let other = resolve_chat_bubble_colors(ChatSender::Other, &theme);
        let grouped = build_chat_bubble_style(&other, ChatSender::Other, false, &theme);
        assert_eq!(
            grouped.get_number("borderBottomLeftRadius"),
            Some(f64::from(theme.radii.lg))
        );
    }

    #[test]
    fn system_messages_are_centered() {
        let theme = WispTheme::dark();
        let colors = resolve_chat_bubble_colors(ChatSender::System, &theme);
        let style = build_chat_bubble_style(&colors, ChatSender::System, true, &theme);
        assert_eq!(style.get_str("alignSelf"), Some("center"));
        assert_eq!(
            build_chat_bubble_meta_style(&colors, &theme).get_str("color"),
            Some(theme.colors.text.muted.as_str())
        );
    }
}
