/// Counts the 4-connected regions of `1`s in a grid.
///
/// Each unvisited land cell seeds an iterative flood fill; the grid may be
/// ragged (rows of different lengths).
///
/// # Examples
///
/// ```
/// use algokit::cs::graph::number_of_islands::number_of_islands;
///
/// let grid = vec![
///     vec![1, 1, 0, 0],
///     vec![0, 1, 0, 1],
///     vec![0, 0, 0, 1],
/// ];
/// assert_eq!(number_of_islands(&grid), 2);
/// ```
pub fn number_of_islands(grid: &[Vec<u8>]) -> usize {
    let mut visited: Vec<Vec<bool>> = grid.iter().map(|row| vec![false; row.len()]).collect();
    let mut count = 0;

    for r in 0..grid.len() {
        for c in 0..grid[r].len() {
            if grid[r][c] != 1 || visited[r][c] {
                continue;
            }

            count += 1;
            visited[r][c] = true;
            let mut stack = vec![(r, c)];

            while let Some((i, j)) = stack.pop() {
                // wrapping_sub sends 0 - 1 past the bounds check.
                let neighbors = [
                    (i.wrapping_sub(1), j),
                    (i + 1, j),
                    (i, j.wrapping_sub(1)),
                    (i, j + 1),
                ];
                for (ni, nj) in neighbors {
                    if ni < grid.len()
                        && nj < grid[ni].len()
                        && grid[ni][nj] == 1
                        && !visited[ni][nj]
                    {
                        visited[ni][nj] = true;
                        stack.push((ni, nj));
                    }
                }
            }
        }
    }

    count
}
