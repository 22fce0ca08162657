use crate::simulation::states::Body;
use crate::visualization::viewport::Viewport;

/// Draw one text frame of `bodies` into a `viewport`-sized character grid
/// at `scale` cells per metre (see [`Viewport::fit_scale`]).
///
/// Each body is drawn as the first letter of its color name (`o` for
/// non-string colors); bodies outside the frame are skipped.
pub fn render_ascii(bodies: &[Body], viewport: &Viewport, scale: f64) -> String {
    let width = viewport.width.max(0.0) as usize;
    let height = viewport.height.max(0.0) as usize;

    let mut buffer = vec![vec![' '; width]; height];
    for body in bodies {
        let (sx, sy) = viewport.to_screen(&body.x, scale);
        if sx < 0.0 || sy < 0.0 {
            continue;
        }
        let (col, row) = (sx as usize, sy as usize);
        if col < width && row < height {
            buffer[row][col] = symbol(body);
        }
    }

    let mut frame = String::with_capacity((width + 3) * (height + 2));
    frame.push_str(&format!("┌{}┐\n", "─".repeat(width)));
    for row in buffer {
        frame.push('│');
        frame.extend(row);
        frame.push_str("│\n");
    }
    frame.push_str(&format!("└{}┘\n", "─".repeat(width)));
    frame
}

fn symbol(body: &Body) -> char {
    body.color
        .as_str()
        .and_then(|name| name.chars().next())
        .unwrap_or('o')
}
