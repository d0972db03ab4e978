use crate::foundation::error::{TweenError, TweenResult};
use crate::path::model::{COMMAND_LETTERS, Path, PathCmd, arg_count};

/// Parse path mini-language text into a command sequence.
///
/// Commas count as whitespace. A completed moveto group silently switches the
/// active command to the matching lineto, so `M0 0 10 10` parses as a moveto
/// followed by a lineto; every other letter repeats when extra argument
/// groups follow. `Z`/`z` takes no arguments and emits immediately.
pub fn parse_path(text: &str) -> TweenResult<Path> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut out = Path::new();
    // Letter currently consuming arguments, plus its required count.
    let mut active: Option<(char, usize)> = None;
    let mut args: Vec<f64> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() || c == ',' {
            i += 1;
            continue;
        }
        if COMMAND_LETTERS.contains(c) {
            if !args.is_empty() {
                return Err(TweenError::parse(format!(
                    "command '{c}' begins while the previous command still wants arguments"
                )));
            }
            let required = arg_count(c)?;
            if required == 0 {
                out.push(PathCmd::new(c, Vec::new()));
                active = None;
            } else {
                active = Some((c, required));
            }
            i += 1;
            continue;
        }

        // Numeric token: optional sign, digits, optional '.' plus digits.
        let start = i;
        if c == '+' || c == '-' {
            i += 1;
        }
        let int_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == int_start {
            return Err(TweenError::parse(format!(
                "unexpected character '{c}' in path data"
            )));
        }
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            let frac_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i == frac_start {
                return Err(TweenError::parse(
                    "digits must follow a decimal point".to_string(),
                ));
            }
        }
        let token = &text[start..i];
        let value: f64 = token
            .parse()
            .map_err(|_| TweenError::parse(format!("invalid number '{token}'")))?;

        let Some((op, required)) = active else {
            return Err(TweenError::parse(format!(
                "number '{token}' appears outside any command"
            )));
        };
        args.push(value);
        if args.len() == required {
            out.push(PathCmd::new(op, std::mem::take(&mut args)));
            // Moveto continues as implicit lineto; other letters repeat.
            active = match op {
                'M' => Some(('L', required)),
                'm' => Some(('l', required)),
                _ => Some((op, required)),
            };
        }
    }

    if !args.is_empty() {
        return Err(TweenError::parse(
            "path data ends with an incomplete command".to_string(),
        ));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/path/parse.rs"]
mod tests;
