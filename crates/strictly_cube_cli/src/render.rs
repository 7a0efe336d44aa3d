//! Plain-text rendering of the cube.

use strictly_cube::{
    Cell, Coord, GameError, GameSnapshot, LineFamily, Phase, Player, WinLineCatalog,
};
use strum::IntoEnumIterator;

/// Renders the board one z-layer at a time.
///
/// Each layer is an N×N grid with x across and y down. Cells on the
/// winning line are bracketed.
pub fn render_board(snapshot: &GameSnapshot) -> String {
    let board = &snapshot.board;
    let n = board.size();
    let winning: &[Coord] = match &snapshot.phase {
        Phase::Won { line, .. } => line.cells(),
        _ => &[],
    };

    let mut out = String::new();
    for z in 0..n {
        out.push_str(&format!("z = {z}\n   "));
        for x in 0..n {
            out.push_str(&format!("{x:^3}"));
        }
        out.push('\n');
        for y in 0..n {
            out.push_str(&format!("{y:>2} "));
            for x in 0..n {
                let coord = Coord::new(x, y, z);
                let mark = match board.get(coord) {
                    Ok(Cell::Occupied(Player::X)) => 'X',
                    Ok(Cell::Occupied(Player::O)) => 'O',
                    _ => '.',
                };
                let cell = if winning.contains(&coord) {
                    format!("[{mark}]")
                } else {
                    format!(" {mark} ")
                };
                out.push_str(&cell);
            }
            out.push('\n');
        }
        out.push('\n');
    }

    let status = match &snapshot.phase {
        Phase::InProgress => format!(
            "Move {}: player {} to play",
            snapshot.moves_played + 1,
            snapshot.current_player
        ),
        Phase::Won { winner, .. } => format!("Player {winner} wins!"),
        Phase::Draw => "It's a draw!".to_string(),
    };
    out.push_str(&status);
    out.push('\n');
    out
}

/// Summarises the line catalog of an N×N×N board per family.
pub fn render_catalog_summary(size: usize) -> Result<String, GameError> {
    let catalog = WinLineCatalog::new(size)?;
    let mut rows = vec![format!("Win lines on a {size}x{size}x{size} board")];
    rows.extend(LineFamily::iter().map(|family| {
        format!(
            "  {:<15} {:>5}",
            family.to_string(),
            catalog.count_by_family(family)
        )
    }));
    rows.push(format!(
        "  {:<15} {:>5} (3N² + 6N + 4 = {})",
        "total",
        catalog.len(),
        WinLineCatalog::expected_len(size)
    ));
    Ok(rows.join("\n") + "\n")
}
