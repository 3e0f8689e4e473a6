use snake_engine::snake::Snapshot;

/// Text frame of the board: `H` head, `o` body, `*` food, `.` empty.
pub fn render_frame(snapshot: &Snapshot, grid_size: usize) -> String {
    let mut rows = vec![vec!['.'; grid_size]; grid_size];

    if let Some(row) = rows.get_mut(snapshot.food.y)
        && let Some(cell) = row.get_mut(snapshot.food.x)
    {
        *cell = '*';
    }

    for (i, segment) in snapshot.segments.iter().enumerate().rev() {
        if let Some(row) = rows.get_mut(segment.y)
            && let Some(cell) = row.get_mut(segment.x)
        {
            *cell = if i == 0 { 'H' } else { 'o' };
        }
    }

    let mut frame = String::with_capacity(grid_size * (grid_size + 1));
    for row in rows {
        frame.extend(row);
        frame.push('\n');
    }
    frame
}
