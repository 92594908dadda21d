use super::timer::TimerFields;

/// Checkbox glyph for an item
pub fn check_glyph(completed: bool, use_emoji: bool) -> &'static str {
    match (completed, use_emoji) {
        (true, true) => "☑",
        (false, true) => "☐",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    }
}

/// Format fields as "HH:MM:SS", keeping partial input visible
pub fn format_clock(fields: &TimerFields) -> String {
    format!("{}:{}:{}", fields.hours, fields.minutes, fields.seconds)
}

/// Draw a car driving along a track of `width` columns.
/// The car sits at the left edge at 0 and at the right edge at 1.
pub fn progress_track(progress: f64, width: usize, use_emoji: bool) -> String {
    let car = if use_emoji { "🏎" } else { ">" };
    // The emoji occupies two columns
    let car_width = if use_emoji { 2 } else { 1 };
    if width <= car_width {
        return car.to_string();
    }

    let travel = width - car_width;
    let offset = (travel as f64 * progress.clamp(0.0, 1.0)).round() as usize;
    let mut track = String::with_capacity(width + 4);
    track.push_str(&"·".repeat(offset));
    track.push_str(car);
    track.push_str(&" ".repeat(travel - offset));
    track
}

/// Keep a selection index inside a list of `len` rows
pub fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        selected.min(len - 1)
    }
}
