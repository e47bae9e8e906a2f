//! Small color-string helpers shared by the style builders.
//!
//! Theme tokens may be replaced by non-hex values (CSS variables, named
//! colors). These helpers fall back to the token itself in that case.

use designsystem::{darken, lighten, with_alpha};

pub(crate) fn border(color: &str) -> String {
    format!("1px solid {color}")
}

pub(crate) fn translucent(color: &str, alpha: f64) -> String {
    with_alpha(color, alpha).unwrap_or_else(|_| color.to_owned())
}

/// Three pixel halo; a `transparent` ring renders as an invisible shadow.
pub(crate) fn focus_ring_shadow(ring: &str) -> String {
    format!("0 0 0 3px {}", translucent(ring, 0.35))
}

pub(crate) fn shade(color: &str, amount: f64) -> String {
    darken(color, amount).unwrap_or_else(|_| color.to_owned())
}

pub(crate) fn tint(color: &str, amount: f64) -> String {
    lighten(color, amount).unwrap_or_else(|_| color.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_interpolates_transparent_verbatim() {
        assert_eq!(focus_ring_shadow("transparent"), "0 0 0 3px transparent");
        assert_eq!(
            focus_ring_shadow("#000000"),
            "0 0 0 3px rgba(0, 0, 0, 0.35)"
        );
    }

    #[test]
    fn non_hex_tokens_pass_through() {
        assert_eq!(shade("var(--brand)", 0.2), "var(--brand)");
        assert_eq!(tint("#000000", 1.0), "#ffffff");
    }
}
