use std::fmt;

/// Renders a message template into `out`, substituting `{Name}` placeholders
/// with `args` in order of appearance. `{{` and `}}` escape literal braces.
/// Total over malformed input: surplus placeholders and unclosed braces are
/// written through literally.
pub fn render<W>(template: &str, args: &[impl fmt::Display], out: &mut W) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    let bytes = template.as_bytes();
    let mut next = 0;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                out.write_str(&template[start..i])?;
                if bytes.get(i + 1) == Some(&b'{') {
                    out.write_char('{')?;
                    i += 2;
                } else if let Some(close) = template[i + 1..].find('}') {
                    let close = i + 1 + close;
                    match args.get(next) {
                        Some(arg) => {
                            write!(out, "{}", arg)?;
                            next += 1;
                        }
                        None => out.write_str(&template[i..=close])?,
                    }
                    i = close + 1;
                } else {
                    // unclosed placeholder, keep the rest as-is
                    start = i;
                    break;
                }
                start = i;
            }
            b'}' => {
                out.write_str(&template[start..i])?;
                out.write_char('}')?;
                i += if bytes.get(i + 1) == Some(&b'}') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    out.write_str(&template[start..])
}
