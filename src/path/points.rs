use kurbo::Point;

use crate::path::model::{Path, PathCmd};

/// Fold a command sequence into its final cursor position.
///
/// The cursor starts at the origin; each command moves it per its letter.
/// Closepath keeps the running position rather than returning to the
/// subpath start.
pub fn end_point(path: &[PathCmd]) -> Point {
    let mut pos = Point::ZERO;
    for cmd in path {
        let a = &cmd.args;
        match cmd.op {
            'M' | 'L' | 'T' => pos = Point::new(a[0], a[1]),
            'm' | 'l' | 't' => pos = Point::new(pos.x + a[0], pos.y + a[1]),
            'H' => pos.x = a[0],
            'h' => pos.x += a[0],
            'V' => pos.y = a[0],
            'v' => pos.y += a[0],
            'C' => pos = Point::new(a[4], a[5]),
            'c' => pos = Point::new(pos.x + a[4], pos.y + a[5]),
            'S' | 'Q' => pos = Point::new(a[2], a[3]),
            's' | 'q' => pos = Point::new(pos.x + a[2], pos.y + a[3]),
            'A' => pos = Point::new(a[5], a[6]),
            'a' => pos = Point::new(pos.x + a[5], pos.y + a[6]),
            _ => {}
        }
    }
    pos
}

/// Collapse every drawn coordinate of `path` onto `point`.
///
/// The result has the same command shape: absolute positions become `point`,
/// relative displacements become zero, and the auxiliary arguments of `A`/`a`
/// (radii, rotation, flags) pass through unchanged. Used to synthesize paths
/// that appear from or vanish into a single point.
pub fn collapse_to_point(path: &[PathCmd], point: Point) -> Path {
    path.iter()
        .map(|cmd| {
            let args = match cmd.op {
                'M' | 'L' | 'T' => vec![point.x, point.y],
                'm' | 'l' | 't' => vec![0.0, 0.0],
                'H' => vec![point.x],
                'V' => vec![point.y],
                'h' | 'v' => vec![0.0],
                'C' => vec![point.x, point.y, point.x, point.y, point.x, point.y],
                'c' => vec![0.0; 6],
                'S' | 'Q' => vec![point.x, point.y, point.x, point.y],
                's' | 'q' => vec![0.0; 4],
                'A' => {
                    let mut args = cmd.args[..5].to_vec();
                    args.extend([point.x, point.y]);
                    args
                }
                'a' => {
                    let mut args = cmd.args[..5].to_vec();
                    args.extend([0.0, 0.0]);
                    args
                }
                _ => Vec::new(),
            };
            PathCmd::new(cmd.op, args)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/path/points.rs"]
mod tests;
