use passgen::Status;
use passgen::config::{CharacterSet, GenerationConfig, Mode};
use passgen::pass::entropy;

use crate::terminal::{
    DIM, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_top, clear, colored_digits,
    flush, print_error, print_rule,
};

/// Redraw the whole generator view.
pub fn draw(config: &GenerationConfig, password: &str, status: Status, notice: Option<&str>) {
    clear();

    box_top("Password");
    if password.is_empty() {
        box_line(&format!("{DIM}(no password yet){RESET}"));
    } else {
        box_line(&colored_digits(password));
    }
    let bits = entropy::bits(config);
    let activity = match status {
        Status::Idle => "",
        Status::Generating => " • generating…",
    };
    box_line(&format!(
        "{DIM}{:.1} bits ({}){}{RESET}",
        bits,
        entropy::strength(bits),
        activity
    ));
    print_rule();

    box_line(&format!("{UNDERLINE}Type{RESET}:  [m] switch"));
    box_line(&format!("  {} Characters", radio(config.mode == Mode::Characters)));
    box_line(&format!("  {} Words", radio(config.mode == Mode::Words)));
    box_line("");

    match config.mode {
        Mode::Characters => draw_characters(config),
        Mode::Words => draw_words(config),
    }

    print_rule();
    box_line_center("r/Space) generate  |  Enter) use this  |  Esc) quit");
    box_bottom();

    match notice {
        Some(msg) => print_error(msg),
        None => print!("\r\n"),
    }
    flush();
}

fn draw_characters(config: &GenerationConfig) {
    let options = &config.random_characters;
    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    box_line(&format!("  Length: ◀ {:>2} ▶  [←/→]", options.length));
    for (index, set) in CharacterSet::ALL.iter().enumerate() {
        box_line(&format!(
            "  {}) {} {}",
            index + 1,
            checkbox(options.enabled_character_sets.contains(*set)),
            set.label()
        ));
    }
}

fn draw_words(config: &GenerationConfig) {
    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    box_line(&format!("  Words: {}", config.words.count));
    box_line(&format!("  Separator: {:?}", config.words.separator));
}

fn radio(selected: bool) -> &'static str {
    if selected { "(•)" } else { "( )" }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
