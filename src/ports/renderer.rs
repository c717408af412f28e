//! Renderer port - playback of a finished match
//!
//! A renderer receives the ordered board snapshots of a match, from the
//! empty board to the terminal one, and the terminal outcome. Graphical
//! playback lives outside this crate; [`TextRenderer`] prints frames.

use std::io::Write;

use crate::{
    Result,
    tictactoe::{BoardState, LineAnalyzer, Outcome},
};

/// Consumer of a finished match
pub trait MatchRenderer {
    fn render(&mut self, snapshots: &[BoardState], outcome: Outcome) -> Result<()>;
}

/// Writes each frame as a 3x3 grid followed by the result line
pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Human-readable result line for a terminal outcome
pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("{player} wins"),
        Outcome::Draw => "draw".to_string(),
        Outcome::Ongoing => "unfinished".to_string(),
    }
}

impl<W: Write> MatchRenderer for TextRenderer<W> {
    fn render(&mut self, snapshots: &[BoardState], outcome: Outcome) -> Result<()> {
        for (frame, board) in snapshots.iter().enumerate() {
            writeln!(self.writer, "frame {frame}")?;
            writeln!(self.writer, "{board}")?;
            writeln!(self.writer)?;
        }
        let line = match (outcome, snapshots.last()) {
            (Outcome::Win(player), Some(last)) => LineAnalyzer::winning_line(&last.cells, player),
            _ => None,
        };
        match line {
            Some([a, b, c]) => writeln!(
                self.writer,
                "result: {} on cells {a}-{b}-{c} (code {})",
                describe_outcome(outcome),
                outcome.code()
            )?,
            None => writeln!(
                self.writer,
                "result: {} (code {})",
                describe_outcome(outcome),
                outcome.code()
            )?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_text_renderer_writes_every_frame() {
        let empty = BoardState::new();
        let first = empty.place(4, Player::A).unwrap();
        let mut renderer = TextRenderer::new(Vec::new());

        renderer
            .render(&[empty, first], Outcome::Ongoing)
            .unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("frame 0\n...\n...\n..."));
        assert!(text.contains("frame 1\n...\n.O.\n..."));
        assert!(text.ends_with("result: unfinished (code 0)\n"));
    }

    #[test]
    fn test_text_renderer_names_winning_line() {
        let before = BoardState::from_codes([1, 2, 1, 2, 1, 2, 0, 0, 0]).unwrap();
        let winning = before.place(6, Player::A).unwrap();
        let mut renderer = TextRenderer::new(Vec::new());

        renderer
            .render(&[before, winning], Outcome::Win(Player::A))
            .unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.ends_with("result: A (O) wins on cells 2-4-6 (code 1)\n"));
    }

    #[test]
    fn test_draw_has_no_winning_line() {
        let full = BoardState::from_codes([1, 2, 1, 1, 2, 2, 2, 1, 1]).unwrap();
        let mut renderer = TextRenderer::new(Vec::new());

        renderer.render(&[full], Outcome::Draw).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.ends_with("result: draw (code 3)\n"));
    }

    #[test]
    fn test_describe_outcome() {
        assert_eq!(describe_outcome(Outcome::Win(Player::A)), "A (O) wins");
        assert_eq!(describe_outcome(Outcome::Win(Player::B)), "B (X) wins");
        assert_eq!(describe_outcome(Outcome::Draw), "draw");
    }
}
