//! Text overlay drawn by the host page
//!
//! The GPU pipeline only fills shapes. Text commands of a frame become
//! absolutely positioned labels that the web host writes into the DOM.

use super::scene::{Color, DrawCmd, DrawList};

/// One positioned line of text for the page overlay
#[derive(Debug, Clone, PartialEq)]
pub struct HudLabel {
    pub text: String,
    /// Inline CSS placing the label over the canvas
    pub style: String,
}

/// Collect the text commands of a frame as page labels, in draw order
pub fn labels(frame: &DrawList) -> Vec<HudLabel> {
    frame
        .commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Text {
                text,
                pos,
                size,
                color,
            } => Some(HudLabel {
                text: text.clone(),
                // pos is the baseline; CSS places the top edge of the line box
                style: format!(
                    "position:absolute;left:{}px;top:{}px;font-size:{}px;line-height:1;color:{}",
                    pos.x,
                    pos.y - size,
                    size,
                    css_color(*color)
                ),
            }),
            _ => None,
        })
        .collect()
}

/// Format a color as a CSS `rgba()` value
pub fn css_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::scene::compose;
    use crate::renderer::vertex::colors;
    use crate::sim::GameState;

    fn state(is_over: bool) -> GameState {
        GameState {
            bird_y: 240.0,
            obstacle_x: 400.0,
            gap_offset: 150.0,
            score: 3,
            is_over,
        }
    }

    #[test]
    fn test_score_label_position() {
        let frame = compose(&state(false), None, &GameConfig::default());
        let labels = labels(&frame);

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "Score: 3");
        assert!(labels[0].style.contains("left:10px;top:6px;font-size:24px"));
    }

    #[test]
    fn test_game_over_labels_in_order() {
        let frame = compose(&state(true), None, &GameConfig::default());
        let texts: Vec<_> = labels(&frame).into_iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["Score: 3", "Game Over", "Press R to restart"]);
    }

    #[test]
    fn test_game_over_label_is_red() {
        let frame = compose(&state(true), None, &GameConfig::default());
        let over = &labels(&frame)[1];
        assert!(over.style.ends_with(&css_color(colors::GAME_OVER)));
        assert!(over.style.contains("top:164px;font-size:36px"));
    }

    #[test]
    fn test_css_color_clamps() {
        assert_eq!(css_color([1.0, 0.0, 0.0, 1.0]), "rgba(255, 0, 0, 1)");
        assert_eq!(css_color([2.0, -1.0, 0.5, 0.5]), "rgba(255, 0, 128, 0.5)");
    }
}
