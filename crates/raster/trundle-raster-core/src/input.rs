//! Circle-list text input.
//!
//! Format: a leading circle count followed by whitespace-separated integer
//! triples `x y r`, one circle per line by convention (any whitespace
//! separates tokens):
//!
//! ```text
//! 2
//! 0 0 50
//! 120 -40 25
//! ```
//!
//! The count is advisory. Reading stops at the first token that does not
//! parse as an integer: a malformed line is treated as end-of-input rather
//! than an error. A negative radius inside the list IS an error. File I/O
//! stays with the caller.

use crate::circle::Circle;
use crate::error::RasterError;

/// Parse a circle-list document into circles.
pub fn parse_circle_list(text: &str) -> Result<Vec<Circle>, RasterError> {
    let mut tokens = text.split_whitespace().map(str::parse::<i32>);
    let mut circles = Vec::new();

    // Leading count; a missing or malformed count means no circles.
    let Some(Ok(count)) = tokens.next() else {
        return Ok(circles);
    };
    circles.reserve(count.max(0) as usize);

    while let (Some(Ok(x)), Some(Ok(y)), Some(Ok(r))) =
        (tokens.next(), tokens.next(), tokens.next())
    {
        circles.push(Circle::new((x, y), r)?);
    }
    Ok(circles)
}
