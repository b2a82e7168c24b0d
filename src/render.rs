use std::io;

use crate::Cell;

pub const SNAKE_CHAR: char = '#';
pub const FOOD_CHAR: char = '#';
pub const BLANK_CHAR: char = ' ';

/// Where the score line starts.
pub const SCORE_ORIGIN: Cell = (1, 1);

/// How a piece of text should look on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paint {
    Plain,
    Food,
    Score,
}

/// Something that can put text at a cursor position.
///
/// Every call is an independent move-then-write, nothing is buffered across
/// calls except what `flush` pushes out.
pub trait Screen {
    fn clear(&mut self) -> io::Result<()>;
    fn print_at(&mut self, pos: Cell, text: &str, paint: Paint) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn print_at(&mut self, pos: Cell, text: &str, paint: Paint) -> io::Result<()> {
        (**self).print_at(pos, text, paint)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Draws only what changed. Holds no game state of its own.
pub struct Renderer<S> {
    screen: S,
}

impl<S: Screen> Renderer<S> {
    pub fn new(screen: S) -> Self {
        Renderer { screen }
    }

    /// Fresh screen with the score line and the starting head.
    pub fn draw_frame(&mut self, head: Cell, score: usize) -> io::Result<()> {
        self.screen.clear()?;
        self.print_score(score)?;
        self.print_char(head, SNAKE_CHAR, Paint::Plain)?;
        self.screen.flush()
    }

    /// Erases the vacated tail, if any, then draws the new head.
    pub fn draw_move(&mut self, discard: Option<Cell>, head: Cell) -> io::Result<()> {
        if let Some(tail) = discard {
            self.print_char(tail, BLANK_CHAR, Paint::Plain)?;
        }
        self.print_char(head, SNAKE_CHAR, Paint::Plain)?;
        self.screen.flush()
    }

    pub fn draw_food(&mut self, food: Cell) -> io::Result<()> {
        self.print_char(food, FOOD_CHAR, Paint::Food)?;
        self.screen.flush()
    }

    pub fn draw_score(&mut self, score: usize) -> io::Result<()> {
        self.print_score(score)?;
        self.screen.flush()
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_score(&mut self, score: usize) -> io::Result<()> {
        let text = format!(" Score: {}", score);
        self.screen.print_at(SCORE_ORIGIN, &text, Paint::Score)
    }

    fn print_char(&mut self, pos: Cell, ch: char, paint: Paint) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.screen.print_at(pos, ch.encode_utf8(&mut buf), paint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Print(Cell, String, Paint),
        Flush,
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Screen for Recorder {
        fn clear(&mut self) -> io::Result<()> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn print_at(&mut self, pos: Cell, text: &str, paint: Paint) -> io::Result<()> {
            self.ops.push(Op::Print(pos, text.to_string(), paint));
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.ops.push(Op::Flush);
            Ok(())
        }
    }

    struct Broken;

    impl Screen for Broken {
        fn clear(&mut self) -> io::Result<()> {
            Ok(())
        }

        fn print_at(&mut self, _: Cell, _: &str, _: Paint) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn print(pos: Cell, text: &str, paint: Paint) -> Op {
        Op::Print(pos, text.to_string(), paint)
    }

    #[test]
    fn frame_clears_then_draws_score_and_head() {
        let mut r = Renderer::new(Recorder::default());
        r.draw_frame((0, 2), 0).unwrap();

        assert_eq!(
            r.screen().ops,
            vec![
                Op::Clear,
                print((1, 1), " Score: 0", Paint::Score),
                print((0, 2), "#", Paint::Plain),
                Op::Flush,
            ]
        );
    }

    #[test]
    fn move_erases_tail_before_head() {
        let mut r = Renderer::new(Recorder::default());
        r.draw_move(Some((3, 4)), (5, 4)).unwrap();
        r.draw_move(None, (6, 4)).unwrap();

        assert_eq!(
            r.screen().ops,
            vec![
                print((3, 4), " ", Paint::Plain),
                print((5, 4), "#", Paint::Plain),
                Op::Flush,
                print((6, 4), "#", Paint::Plain),
                Op::Flush,
            ]
        );
    }

    #[test]
    fn food_and_score_use_their_own_paint() {
        let mut r = Renderer::new(Recorder::default());
        r.draw_food((9, 9)).unwrap();
        r.draw_score(12).unwrap();

        assert_eq!(
            r.screen().ops,
            vec![
                print((9, 9), "#", Paint::Food),
                Op::Flush,
                print((1, 1), " Score: 12", Paint::Score),
                Op::Flush,
            ]
        );
    }

    #[test]
    fn write_failures_propagate() {
        let mut r = Renderer::new(Broken);
        let err = r.draw_move(None, (1, 2)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn borrowed_screens_render_too() {
        let mut rec = Recorder::default();
        Renderer::new(&mut rec).draw_score(3).unwrap();
        assert_eq!(rec.ops.len(), 2);
    }
}
