//! Playback status line
//!
//! The simulated player has no full-screen view; its state shows up as a
//! segment of the status bar whenever a source is loaded.

use ratatui::prelude::*;

use crate::models::format_resume;
use crate::player::Player;
use crate::ui::Theme;

/// Spans for the status bar's playback segment, or None when nothing is
/// loaded
pub fn status_line(player: &Player) -> Option<Vec<Span<'static>>> {
    let source = player.source()?;
    let glyph = if player.is_playing() { "▶" } else { "⏸" };

    Some(vec![
        Span::styled(format!("{} ", glyph), Theme::accent()),
        Span::styled(source.title.clone(), Theme::text()),
        Span::styled(
            format!("  {}", format_resume(player.position())),
            Theme::dimmed(),
        ),
        Span::styled("  Space", Theme::keybind()),
        Span::styled(" play/pause ", Theme::keybind_desc()),
        Span::styled("[ ]", Theme::keybind()),
        Span::styled(" seek", Theme::keybind_desc()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaybackSource;

    #[test]
    fn test_status_line_absent_without_source() {
        assert!(status_line(&Player::new()).is_none());
    }

    #[test]
    fn test_status_line_present_with_source() {
        let mut player = Player::new();
        player.load(
            1,
            PlaybackSource {
                url: "http://example.test/v.mp4".into(),
                title: "The Batman".into(),
            },
            Some(65.0),
        );
        let spans = status_line(&player).unwrap();
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("The Batman"));
        assert!(text.contains("1:05"));
    }
}
