//! Page splitting with completion cues.

use craftmac_types::MacroConfig;

use super::error::MacroError;


/// Split macro lines into fixed-size pages with `/echo` completion markers.
///
/// Every full page carries `page_size - 1` content lines followed by a
/// `/echo Page <k> done <se.<n>>` marker and a blank separator; the marker
/// occupies the remaining slot of the game's per-macro line limit. The final
/// page, `page_size` lines or fewer, gets no marker. With
/// `sound_effect_on_last_page` set, a single `/echo Macro done <se.<n>>`
/// line is appended after all content.
pub fn paginate(lines: &[String], config: &MacroConfig) -> Result<Vec<String>, MacroError> {
    if config.page_size < 2 {
        return Err(MacroError::InvalidPageSize {
            got: config.page_size,
        });
    }

    let se = config.sound_effect;
    let mut out = Vec::with_capacity(lines.len() + 2 * (lines.len() / config.page_size) + 1);
    let mut remaining = lines;
    let mut page = 1;

    while remaining.len() > config.page_size {
        let (head, tail) = remaining.split_at(config.page_size - 1);
        out.extend_from_slice(head);
        out.push(format!("/echo Page {page} done <se.{se}>"));
        out.push(String::new());
        page += 1;
        remaining = tail;
    }
    out.extend_from_slice(remaining);

    if config.sound_effect_on_last_page {
        out.push(format!("/echo Macro done <se.{se}>"));
    }

    Ok(out)
}
