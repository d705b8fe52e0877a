//! Line-oriented terminal front end for one quiz session.

use std::io::{self, BufRead, Write};

use quiz_core::model::{DrawMode, Points, TopicId};
use quiz_core::scoring::SESSION_LENGTH;
use services::{BoardView, QuestionReveal, QuizSession};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Board,
    Pick { topic: TopicId, points: Points, mode: DrawMode },
    Reveal,
    Mark(bool),
    Result,
    Reset,
    Rules,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Self::Board);
        };
        match head {
            "board" | "b" => Ok(Self::Board),
            "pick" | "p" => {
                let topic = words
                    .next()
                    .ok_or("usage: pick <topic> <points> [safe|risk]")?;
                let points = words
                    .next()
                    .and_then(|raw| raw.parse::<u32>().ok())
                    .ok_or("points must be a number, e.g. 300")?;
                let mode = words.next().map_or(DrawMode::Safe, DrawMode::from_tag);
                Ok(Self::Pick {
                    topic: TopicId::new(topic),
                    points: Points::new(points),
                    mode,
                })
            }
            "reveal" | "r" => Ok(Self::Reveal),
            "right" | "y" => Ok(Self::Mark(true)),
            "wrong" | "n" => Ok(Self::Mark(false)),
            "result" => Ok(Self::Result),
            "reset" => Ok(Self::Reset),
            "rules" => Ok(Self::Rules),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" => Ok(Self::Quit),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}

const HELP: &str = "\
commands:
  board                          show what can be drawn
  pick <topic> <points> [risk]   draw a question (safe unless `risk`)
  reveal                         show the answer of the open question
  right | wrong                  mark the open question
  result                         show the current grade
  reset                          start over with the same team and topics
  rules                          show the game rules
  quit";

/// Run the session until the input ends or the player quits.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `out`.
pub fn run(session: &mut QuizSession, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "Team {}: {} questions per game.", session.team(), SESSION_LENGTH)?;
    write_board(&mut out, session)?;

    let mut shown: Option<QuestionReveal> = None;
    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };

        match command {
            Command::Board => write_board(&mut out, session)?,
            Command::Pick { topic, points, mode } => {
                match session.pick_question(&topic, points, mode) {
                    Ok(reveal) => {
                        writeln!(
                            out,
                            "[{} • {} • {}] {}",
                            reveal.topic_name, reveal.points, reveal.mode, reveal.question_text
                        )?;
                        shown = Some(reveal);
                    }
                    Err(err) => writeln!(out, "cannot draw: {err}")?,
                }
            }
            Command::Reveal => match &shown {
                Some(reveal) if session.open_question().is_some() => {
                    writeln!(out, "answer: {}", reveal.answer_text)?;
                }
                _ => writeln!(out, "no open question")?,
            },
            Command::Mark(correct) => match session.resolve_answer(correct) {
                Some(outcome) => {
                    shown = None;
                    writeln!(out, "{:+} → {}", outcome.delta, outcome.raw_score)?;
                    if outcome.is_finished {
                        write_result(&mut out, session)?;
                        break;
                    }
                    write_board(&mut out, session)?;
                }
                None => writeln!(out, "no open question")?,
            },
            Command::Result => write_result(&mut out, session)?,
            Command::Reset => {
                session.reset();
                shown = None;
                writeln!(out, "new game")?;
                write_board(&mut out, session)?;
            }
            Command::Rules => write_rules(&mut out, session)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }
    Ok(())
}

fn write_board(out: &mut impl Write, session: &QuizSession) -> io::Result<()> {
    let board: BoardView = session.board();
    writeln!(
        out,
        "questions {}/{}  score {}",
        board.drawn, SESSION_LENGTH, board.raw_score
    )?;
    write!(out, "topics")?;
    for topic in &board.topics {
        if topic.is_disabled() {
            write!(out, "  {}:done", topic.topic_id.as_str())?;
        } else {
            write!(out, "  {}:{}", topic.topic_id.as_str(), topic.remaining)?;
        }
    }
    writeln!(out, "  (left {})", board.total_remaining())?;
    for column in &board.columns {
        writeln!(
            out,
            "{}  picks {}/{}  risk {}/{}",
            column.group.title(),
            column.usage.drawn,
            column.quota.pick,
            column.usage.risk_used,
            column.quota.risk
        )?;
        for topic in &column.topics {
            write!(out, "  {:<10}", topic.topic_id.as_str())?;
            for card in &topic.cards {
                let safe = if card.safe_enabled { 'S' } else { '-' };
                let risk = if card.risk_enabled { 'R' } else { '-' };
                write!(out, " {}[{safe}{risk}]x{}", card.points, card.remaining)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_rules(out: &mut impl Write, session: &QuizSession) -> io::Result<()> {
    let catalog = session.catalog();
    match catalog.rules() {
        Some(rules) => writeln!(out, "{rules}")?,
        None => writeln!(out, "no rules text in this catalog")?,
    }
    if let Some(version) = catalog.version() {
        writeln!(out, "catalog version {version}")?;
    }
    Ok(())
}

fn write_result(out: &mut impl Write, session: &QuizSession) -> io::Result<()> {
    let result = session.result();
    writeln!(out, "raw score: {} / {}", result.raw_score, result.raw_max)?;
    writeln!(
        out,
        "({} / {}) × 20 = {:.2}",
        result.raw_score, result.raw_max, result.scaled
    )?;
    writeln!(out, "station points: {}", result.station_points)?;
    writeln!(out, "success: {}%", result.percent())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use services::{ScriptedRandom, SessionConfig, load_catalog_json};

    fn session() -> QuizSession {
        let catalog = load_catalog_json(crate::SAMPLE_CATALOG).unwrap();
        QuizSession::new(Arc::new(catalog), SessionConfig::new("Owls"))
            .with_random(ScriptedRandom::first())
    }

    fn play(script: &str) -> (QuizSession, String) {
        let mut session = session();
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_defaults_to_safe() {
        assert_eq!(
            Command::parse("pick pi 300").unwrap(),
            Command::Pick {
                topic: TopicId::new("pi"),
                points: Points::new(300),
                mode: DrawMode::Safe,
            }
        );
        assert!(Command::parse("pick pi lots").is_err());
        assert_eq!(Command::parse("").unwrap(), Command::Board);
    }

    #[test]
    fn pick_reveal_and_mark() {
        let (session, out) = play("pick pi 100 risk\nreveal\nright\nquit\n");
        assert!(out.contains("[Pi & circles • 100 • risk]"));
        assert!(out.contains("answer: "));
        assert!(out.contains("+150 → 150"));
        assert_eq!(session.raw_score(), 150);
    }

    #[test]
    fn rejected_draw_is_reported() {
        let (session, out) = play("pick pi 100\nright\npick geom 200\nwrong\npick logic 100\nquit\n");
        assert!(out.contains("cannot draw: pick quota reached for A"));
        assert_eq!(session.total_drawn(), 2);
    }

    #[test]
    fn rules_come_from_the_catalog() {
        let (_, out) = play("rules\nquit\n");
        assert!(out.contains("Each game has 10 draws."));
        assert!(out.contains("catalog version 0.1.0"));
    }

    #[test]
    fn board_lists_topic_totals() {
        let (_, out) = play("pick pi 100\ny\nquit\n");
        assert!(out.contains("topics  pi:5  geom:5"));
        assert!(out.contains("topics  pi:4  geom:5"));
    }

    #[test]
    fn full_game_prints_result() {
        let script = "\
pick pi 100\ny
pick geom 200\ny
pick pi 300\ny
pick geom 300\ny
pick algebra 300\ny
pick pi 400\ny
pick geom 400\ny
pick algebra 400\ny
pick pi 500\ny
pick geom 500\ny
";
        let (session, out) = play(script);
        assert!(session.is_finished());
        assert!(out.contains("raw score: 3400 / 4900"));
        assert!(out.contains("station points: 14"));
    }
}
