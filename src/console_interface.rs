use crate::core::{Board, Direction, Scenery, Tile, UserAction, Vec2};
use crate::models::{GameRenderState, PlayMode, PlayerSlot};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    boards: &[&Board],
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let columns = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints(boards.iter().map(|_| Constraint::Ratio(1, boards.len() as u32)))
            .split(chunks[0]);

        for (i, board) in boards.iter().enumerate() {
            let title = match (state.mode, i) {
                (PlayMode::Solo, _) => format!("Level {}/{}", state.level_index + 1, state.level_count),
                (PlayMode::Dual, 0) => format!("Player 1 - level {}", state.level_index + 1),
                (PlayMode::Dual, _) => format!("Player 2 - level {}", state.level_index + 1),
            };
            let paragraph = Paragraph::new(render_board_decorated(board))
                .block(Block::default().borders(Borders::ALL).title(title))
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, columns[i]);
        }

        let instructions = match (state.winner, state.mode) {
            (Some(_), PlayMode::Solo) => "Solved! N for the next level, Q to quit".to_string(),
            (Some(PlayerSlot::First), PlayMode::Dual) => "Player 1 wins! N for the next level".to_string(),
            (Some(PlayerSlot::Second), PlayMode::Dual) => "Player 2 wins! N for the next level".to_string(),
            (None, PlayMode::Solo) => "Move: WASD or arrows | N/P: next/previous | Backspace: reset | Q: quit".to_string(),
            (None, PlayMode::Dual) => "P1: arrows, P2: WASD | N/P: next/previous | Backspace: reset | Q: quit".to_string(),
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions
        };

        let instructions = if let Some(change_type) = &state.last_change {
            format!("{} | Last: {:?}", instructions, change_type)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// The board in level text symbols, scenery shown as plain floor.
pub fn render_board_to_string(board: &Board) -> String {
    render_board_with(board, |_| ' ')
}

/// The board as drawn in the terminal, with scenery outside the walls.
pub fn render_board_decorated(board: &Board) -> String {
    render_board_with(board, |scenery| match scenery {
        Scenery::Grass => '"',
        Scenery::Pebbles => ':',
        Scenery::Shrub => '&',
        Scenery::Puddle => '~',
    })
}

fn render_board_with<F>(board: &Board, scenery_symbol: F) -> String
where
    F: Fn(Scenery) -> char,
{
    let mut result = String::new();
    for y in 0..board.height {
        for x in 0..board.width {
            let pos = Vec2::new(x, y);
            let has_player = board.player == Some(pos);
            let has_box = board.has_box_at(&pos);
            let ch = match (board.map.get_tile(&pos), board.is_goal(&pos)) {
                (Some(Tile::Wall | Tile::Corner), _) => '#',
                (_, true) if has_player => '+',
                (_, true) if has_box => '*',
                (_, true) => '.',
                _ if has_player => '@',
                _ if has_box => '$',
                (Some(Tile::Scenery(scenery)), false) => scenery_symbol(scenery),
                _ => ' ',
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    UserAction(PlayerSlot, UserAction),
    Next,
    Previous,
    Reset,
    Quit,
    Timeout,
    Unknown,
}

/// Arrows always drive the first player. WASD drives the second player in dual mode
/// and the first one otherwise.
pub fn key_to_input(code: KeyCode, mode: PlayMode) -> ConsoleInput {
    let wasd_slot = match mode {
        PlayMode::Solo => PlayerSlot::First,
        PlayMode::Dual => PlayerSlot::Second,
    };
    let arrow = |direction| ConsoleInput::UserAction(PlayerSlot::First, UserAction::Move(direction));
    let wasd = |direction| ConsoleInput::UserAction(wasd_slot, UserAction::Move(direction));

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::Next,
        KeyCode::Char('p') | KeyCode::Char('P') => ConsoleInput::Previous,
        KeyCode::Backspace => ConsoleInput::Reset,
        KeyCode::Up => arrow(Direction::Up),
        KeyCode::Down => arrow(Direction::Down),
        KeyCode::Left => arrow(Direction::Left),
        KeyCode::Right => arrow(Direction::Right),
        KeyCode::Char('w') | KeyCode::Char('W') => wasd(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') => wasd(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') => wasd(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') => wasd(Direction::Right),
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input(mode: PlayMode) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(key_to_input(code, mode));
        }
    }
    Ok(ConsoleInput::Timeout)
}
